use std::collections::HashMap;

use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use log::warn;

use crate::models::HousingFeatures;
use crate::pipeline::Pipeline;
use crate::render;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/predict", web::post().to(predict));
}

async fn index() -> impl Responder {
    html_page(render::page(&HashMap::new(), None))
}

/// Form submission handler. Both outcomes render the same page with 200;
/// failures are reported in-band as page content, never as an error status.
async fn predict(
    pipeline: web::Data<Pipeline>,
    form: web::Form<HashMap<String, String>>,
) -> impl Responder {
    let values = form.into_inner();
    let message = match HousingFeatures::from_form(&values) {
        Ok(features) => render::success_message(pipeline.predict(&features.to_array())),
        Err(e) => {
            warn!("prediction request rejected: {e}");
            format!("Error: {e}")
        }
    };
    html_page(render::page(&values, Some(&message)))
}

fn html_page(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}
