//! Category Endpoints

use super::segment;
use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::{Category, Service};
use crate::transport::Transport;

/// Flat list; `children` is empty on every node
pub async fn list_categories<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Category>> {
    api.get_list("/categories/").await
}

/// Root nodes with nested `children`
pub async fn category_tree<T: Transport>(api: &ApiClient<T>) -> ApiResult<Vec<Category>> {
    api.get_list("/categories/tree").await
}

pub async fn get_category<T: Transport>(api: &ApiClient<T>, category_id: &str) -> ApiResult<Option<Category>> {
    api.get(&format!("/categories/{}", segment(category_id))).await
}

pub async fn list_category_services<T: Transport>(api: &ApiClient<T>, category_id: &str) -> ApiResult<Vec<Service>> {
    api.get_list(&format!("/categories/{}/services", segment(category_id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[tokio::test]
    async fn test_category_tree_decodes_nesting() {
        let mock = MockTransport::new();
        mock.respond(
            "/categories/tree",
            200,
            r#"[{"id":1,"name":"Beauty","children":[{"id":2,"name":"Hair","children":[]}]}]"#,
        );
        let api = ApiClient::new("http://api.test", mock);

        let tree = category_tree(&api).await.unwrap();
        assert_eq!(tree[0].children[0].name, "Hair");
    }

    #[tokio::test]
    async fn test_get_category_encodes_id() {
        let mock = MockTransport::new();
        let api = ApiClient::new("http://api.test", mock.clone());

        let err = get_category(&api, "a b").await.unwrap_err();
        assert_eq!(err.message(), "Request failed with status 404");
        assert_eq!(mock.requested_paths(), vec!["/categories/a%20b"]);
    }
}
