use crate::common::mock_server::MockServerStorage;
use actix_web::{web, HttpResponse};
use ethioverifypay_rust::apis::businesses::{BusinessRecord, CreateBusinessRequest};
use rand::{distributions::Alphanumeric, Rng};
use serde_json::json;

/// POST /api/businesses
pub(super) async fn create_business(
    storage: web::Data<MockServerStorage>,
    request: web::Json<CreateBusinessRequest>,
) -> HttpResponse {
    let request = request.into_inner();

    if request.business_name.is_empty() || request.owner_name.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Validation failed",
            "message": "businessName and ownerName are required"
        }));
    }

    // Assign a fresh opaque verification code
    let verification_code: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect();

    let record = BusinessRecord {
        business_name: request.business_name,
        owner_name: request.owner_name,
        telebirr_account: Some(request.telebirr_account).filter(|s| !s.is_empty()),
        cbe_account: Some(request.cbe_account).filter(|s| !s.is_empty()),
        verification_code: verification_code.clone(),
    };

    storage
        .write()
        .unwrap()
        .insert(verification_code, record.clone());

    HttpResponse::Created().json(record)
}

/// GET /api/businesses/{code}
pub(super) async fn get_business_by_code(
    storage: web::Data<MockServerStorage>,
    path: web::Path<String>,
) -> HttpResponse {
    let code = path.into_inner();

    storage.read().unwrap().get(&code).map_or_else(
        || HttpResponse::NotFound().finish(),
        |record| HttpResponse::Ok().json(record),
    )
}
