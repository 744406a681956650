use actix_web::{get, post, web, HttpResponse, ResponseError};
use serde::Serialize;

use crate::form::ExpenseForm;
use crate::ledger::PartyTotal;
use crate::schemas::ExpenseDraft;
use crate::tracker::ExpenseTracker;

#[get("/items")]
async fn get_items(tracker: web::Data<ExpenseTracker>) -> HttpResponse {
    match tracker.load().await {
        Ok(ledger) => HttpResponse::Ok().json(ledger.into_records()),
        Err(err) => err.error_response(),
    }
}

#[post("/items")]
async fn post_item(
    tracker: web::Data<ExpenseTracker>,
    draft: web::Json<ExpenseDraft>,
) -> HttpResponse {
    match tracker.add_item(draft.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(record),
        Err(err) => err.error_response(),
    }
}

#[post("/items/form")]
async fn post_form(
    tracker: web::Data<ExpenseTracker>,
    form: web::Form<ExpenseForm>,
) -> HttpResponse {
    match tracker.add_form(form.into_inner()).await {
        Ok(record) => HttpResponse::Created().json(record),
        Err(err) => err.error_response(),
    }
}

#[get("/summary")]
async fn get_summary(tracker: web::Data<ExpenseTracker>) -> HttpResponse {
    match tracker.load().await {
        Ok(ledger) => HttpResponse::Ok().json(ledger.summary()),
        Err(err) => err.error_response(),
    }
}

#[derive(Serialize)]
struct PayeeTotals {
    totals: Vec<PartyTotal>,
}

// Every payee seen so far, not only the two parties
#[get("/totals")]
async fn get_totals(tracker: web::Data<ExpenseTracker>) -> HttpResponse {
    match tracker.load().await {
        Ok(ledger) => {
            let mut totals: Vec<PartyTotal> = ledger
                .totals_by_party()
                .into_iter()
                .map(|(party, total)| PartyTotal { party, total })
                .collect();
            totals.sort_by(|a, b| a.party.cmp(&b.party));
            HttpResponse::Ok().json(PayeeTotals { totals })
        }
        Err(err) => err.error_response(),
    }
}

#[get("/parties/{party}/total")]
async fn get_party_total(
    tracker: web::Data<ExpenseTracker>,
    party: web::Path<String>,
) -> HttpResponse {
    let party = party.into_inner();
    match tracker.load().await {
        Ok(ledger) => {
            let total = ledger.personal_expense(&party);
            HttpResponse::Ok().json(PartyTotal { party, total })
        }
        Err(err) => err.error_response(),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_items)
        .service(post_item)
        .service(post_form)
        .service(get_summary)
        .service(get_totals)
        .service(get_party_total);
}
