// UNIT UNDER TEST: Endpoint
//
// TEST COVERAGE:
//   - Method and path for every operation
//   - Query parameters and URL joining
//   - Mutating classification

use crate::endpoints::Endpoint;
use reqwest::Method;

#[cfg(test)]
mod endpoint_tests {
    use super::*;

    #[test]
    fn test_methods_and_paths() {
        let cases = [
            (Endpoint::ListUsers { page: 2 }, Method::GET, "/api/users"),
            (Endpoint::GetUser { id: 2 }, Method::GET, "/api/users/2"),
            (Endpoint::CreateUser, Method::POST, "/api/users/"),
            (Endpoint::UpdateUser { id: 2 }, Method::PUT, "/api/users/2"),
            (Endpoint::DeleteUser { id: 2 }, Method::DELETE, "/api/users/2"),
            (Endpoint::Register, Method::POST, "/api/register"),
            (Endpoint::GetUnknown { id: 23 }, Method::GET, "/api/unknown/23"),
        ];

        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method, "method of {endpoint:?}");
            assert_eq!(endpoint.path(), path, "path of {endpoint:?}");
        }
    }

    #[test]
    fn test_only_listing_carries_query() {
        assert_eq!(
            Endpoint::ListUsers { page: 2 }.query(),
            vec![("page", "2".to_string())]
        );
        assert!(Endpoint::GetUser { id: 2 }.query().is_empty());
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let endpoint = Endpoint::GetUser { id: 2 };

        assert_eq!(
            endpoint.url("https://reqres.in/"),
            "https://reqres.in/api/users/2"
        );
        assert_eq!(
            endpoint.url("https://reqres.in"),
            "https://reqres.in/api/users/2"
        );
    }

    #[test]
    fn test_display_includes_method_and_page() {
        assert_eq!(
            Endpoint::ListUsers { page: 2 }.to_string(),
            "GET /api/users?page=2"
        );
        assert_eq!(
            Endpoint::DeleteUser { id: 2 }.to_string(),
            "DELETE /api/users/2"
        );
    }

    #[test]
    fn test_mutating_endpoints() {
        assert!(Endpoint::CreateUser.is_mutating());
        assert!(Endpoint::UpdateUser { id: 2 }.is_mutating());
        assert!(Endpoint::DeleteUser { id: 2 }.is_mutating());
        assert!(!Endpoint::ListUsers { page: 2 }.is_mutating());
        assert!(!Endpoint::Register.is_mutating());
    }
}
