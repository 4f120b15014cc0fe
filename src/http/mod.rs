//! HTTP response building module entry point

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_500_response, build_bytes_response,
    build_options_response, build_text_response, json_response,
};
