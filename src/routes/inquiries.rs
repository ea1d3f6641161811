use actix_web::{HttpResponse, Responder, post, web};
use log::error;
use serde_json::json;
use validator::Validate;

use crate::domain::inquiry::NewInquiry;
use crate::forms::inquiry::CreateInquiryForm;
use crate::repository::memory::MemoryRepository;
use crate::services::inquiries;

#[post("/inquiries")]
pub async fn create_inquiry(
    web::Json(form): web::Json<CreateInquiryForm>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        error!("Invalid inquiry payload: {e}");
        return HttpResponse::BadRequest().json(json!({"error": "Invalid inquiry data"}));
    }
    let new_inquiry = match NewInquiry::try_from(form) {
        Ok(new_inquiry) => new_inquiry,
        Err(e) => {
            error!("Invalid inquiry payload: {e}");
            return HttpResponse::BadRequest().json(json!({"error": "Invalid inquiry data"}));
        }
    };

    match inquiries::create_inquiry(repo.get_ref(), &new_inquiry) {
        Ok(inquiry) => HttpResponse::Created().json(json!({
            "message": "Inquiry sent successfully",
            "inquiry": inquiry,
        })),
        Err(e) => {
            error!("Failed to create inquiry: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to create inquiry"}))
        }
    }
}
