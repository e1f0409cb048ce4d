//! Error messages as users see them in a failed scan's report.

use spscan::{resolve, AppError, HttpStatusCode, SiteDepth, ValidationError};

mod url_error_tests {
    use super::*;

    #[test]
    fn invalid_url_message() {
        let err = resolve("not a url", SiteDepth::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid URL: not a url - relative URL without a base"
        );
    }

    #[test]
    fn empty_url_message() {
        let err = resolve("", SiteDepth::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL:  - URL is empty");
    }

    #[test]
    fn missing_library_message_tracks_depth() {
        let err = resolve("https://host/teams", SiteDepth::new(1).unwrap()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find a library name in https://host/teams: expected at least 2 path segments"
        );
    }
}

mod api_error_tests {
    use super::*;

    #[test]
    fn http_error_message() {
        let err = AppError::http(401, "https://host/sites/A/B/_api/web/GetList(@v)", "Unauthorized");
        assert_eq!(
            err.to_string(),
            "HTTP 401 from https://host/sites/A/B/_api/web/GetList(@v)\nUnauthorized"
        );
        assert_eq!(err.status_code(), Some(HttpStatusCode::Unauthorized));
    }

    #[test]
    fn metadata_missing_message() {
        let err = AppError::MetadataMissing {
            library_path: "/sites/A/B/Docs".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Could not read a list Id for library /sites/A/B/Docs"
        );
        assert_eq!(err.status_code(), None);
    }
}

mod validation_error_tests {
    use super::*;

    #[test]
    fn site_depth_out_of_bounds() {
        let err = SiteDepth::new(0).unwrap_err();
        assert_eq!(err, ValidationError::OutOfBounds { value: 0, min: 1, max: 16 });
        assert_eq!(err.to_string(), "Value out of bounds: 0, expected 1..=16");

        let app: AppError = err.into();
        assert_eq!(app.to_string(), "Value out of bounds: 0, expected 1..=16");
    }

    #[test]
    fn delivery_failure_lists_every_failure() {
        let err = AppError::DeliveryFailed {
            failures: vec!["disk full".to_string(), "permission denied".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Output delivery failed: disk full, permission denied"
        );
    }
}
