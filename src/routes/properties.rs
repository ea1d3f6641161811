use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use log::error;
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::property::{NewProperty, UpdateProperty};
use crate::domain::types::PropertyId;
use crate::forms::property::{CreatePropertyForm, UpdatePropertyForm};
use crate::repository::memory::MemoryRepository;
use crate::services::properties::{self, PropertiesQuery};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQueryParams {
    status: Option<String>,
    property_type: Option<String>,
    min_price: Option<String>,
    max_price: Option<String>,
    search: Option<String>,
}

impl From<ListQueryParams> for PropertiesQuery {
    fn from(params: ListQueryParams) -> Self {
        Self {
            status: params.status,
            property_type: params.property_type,
            min_price: params.min_price,
            max_price: params.max_price,
            search: params.search,
        }
    }
}

#[get("/properties")]
pub async fn list_properties(
    params: web::Query<ListQueryParams>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    match properties::list_properties(repo.get_ref(), params.into_inner().into()) {
        Ok(listings) => HttpResponse::Ok().json(listings),
        Err(e) => {
            error!("Failed to list properties: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch properties"}))
        }
    }
}

#[get("/properties/{property_id}")]
pub async fn get_property(
    property_id: web::Path<PropertyId>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    match properties::get_property(repo.get_ref(), property_id.into_inner()) {
        Ok(Some(property)) => HttpResponse::Ok().json(property),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Failed to get property: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch property"}))
        }
    }
}

#[post("/properties")]
pub async fn create_property(
    web::Json(form): web::Json<CreatePropertyForm>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        error!("Invalid property payload: {e}");
        return HttpResponse::BadRequest().json(json!({"error": "Invalid property data"}));
    }
    let new_property = match NewProperty::try_from(form) {
        Ok(new_property) => new_property,
        Err(e) => {
            error!("Invalid property payload: {e}");
            return HttpResponse::BadRequest().json(json!({"error": "Invalid property data"}));
        }
    };

    match properties::create_property(repo.get_ref(), &new_property) {
        Ok(property) => HttpResponse::Created().json(property),
        Err(e) => {
            error!("Failed to create property: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to create property"}))
        }
    }
}

#[put("/properties/{property_id}")]
pub async fn update_property(
    property_id: web::Path<PropertyId>,
    web::Json(form): web::Json<UpdatePropertyForm>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        error!("Invalid property payload: {e}");
        return HttpResponse::BadRequest().json(json!({"error": "Invalid property data"}));
    }
    let updates = match UpdateProperty::try_from(form) {
        Ok(updates) => updates,
        Err(e) => {
            error!("Invalid property payload: {e}");
            return HttpResponse::BadRequest().json(json!({"error": "Invalid property data"}));
        }
    };

    match properties::update_property(repo.get_ref(), property_id.into_inner(), &updates) {
        Ok(Some(property)) => HttpResponse::Ok().json(property),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Failed to update property: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to update property"}))
        }
    }
}

#[delete("/properties/{property_id}")]
pub async fn delete_property(
    property_id: web::Path<PropertyId>,
    repo: web::Data<MemoryRepository>,
) -> impl Responder {
    match properties::delete_property(repo.get_ref(), property_id.into_inner()) {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("Failed to delete property: {e}");
            HttpResponse::InternalServerError().json(json!({"error": "Failed to delete property"}))
        }
    }
}
