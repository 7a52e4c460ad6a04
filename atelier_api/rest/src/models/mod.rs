use serde::Serialize;

pub mod contact;
pub mod quote;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiMessageResponse<T> {
    pub message: &'static str,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiDataResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiValidationError {
    pub message: &'static str,
    pub errors: Vec<ApiFieldError>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ApiFieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ApiFieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}
