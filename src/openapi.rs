//! OpenAPI documentation configuration
//!
//! Generates the OpenAPI 3 specification for the mockr API.

use utoipa::OpenApi;

use crate::handlers::InfoResponse;
use crate::mock::{
    MatchDetails, MatchResponse, MockEnvelope, RegisterResponse, Registration, SearchHit,
    SearchResponse,
};

/// mockr - OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "mockr",
        version = "1.0.0",
        description = r#"
## Mock biometric enrollment/search/match API

mockr simulates a biometric backend for downstream client testing:

- **v1** - base64-encoded images in JSON bodies
- **v2** - multipart form uploads
- **v3** - raw binary bodies (match: two images joined by a comma byte)

Responses are synthetic: fresh UUIDs, randomized scores, and a simulated
processing delay proportional to payload size. Roughly 10% of requests to
mock endpoints are randomly rejected or faulted to exercise client error
handling, independent of payload validity.
"#,
        license(name = "MIT OR Apache-2.0")
    ),
    tags(
        (name = "v1", description = "Base64 JSON transport"),
        (name = "v2", description = "Multipart form transport"),
        (name = "v3", description = "Raw binary transport"),
        (name = "legacy", description = "Unversioned compatibility endpoints"),
        (name = "meta", description = "Service metadata")
    ),
    paths(
        crate::handlers::json::register,
        crate::handlers::json::search,
        crate::handlers::json::match_images,
        crate::handlers::form::register,
        crate::handlers::form::search,
        crate::handlers::form::match_images,
        crate::handlers::binary::register,
        crate::handlers::binary::search,
        crate::handlers::binary::match_images,
        crate::handlers::legacy::enroll,
        crate::handlers::legacy::search,
        crate::handlers::legacy::match_images,
        crate::handlers::info::info,
    ),
    components(
        schemas(
            InfoResponse,
            MockEnvelope,
            RegisterResponse,
            Registration,
            SearchResponse,
            SearchHit,
            MatchResponse,
            MatchDetails,
        )
    )
)]
pub struct ApiDoc;
