use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::form::{ContactRequestDto, SubmitFormResponseDto},
};

pub async fn submit_contact(payload: &ContactRequestDto) -> Result<SubmitFormResponseDto, ApiError> {
    let body = serialize_json(payload)?;
    let request = post("/api/contact").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
