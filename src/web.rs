//! Web interface.

use rouille::{router, Request, Response};

use crate::db::Db;
use crate::format;
use crate::ingest::{self, IngestError, IngestRequest};
use crate::prelude::*;
use crate::settings::Settings;
use crate::templates;
use crate::thinning;

/// Starts the web server and never returns.
pub fn start_server(settings: Settings, db: Arc<Mutex<Db>>) -> ! {
    let address = format!("0.0.0.0:{}", settings.http_port);
    rouille::start_server(address, move |request| handle_request(request, &settings, &db))
}

fn handle_request(request: &Request, settings: &Settings, db: &Arc<Mutex<Db>>) -> Response {
    router!(request,
        (GET) ["/"] => { index(db) },
        (GET) ["/data"] => { data(request, db) },
        (POST) ["/"] => { post(request, settings, db) },
        _ => Response::empty_404()
    )
}

/// The summary page: the most recent reading and the washer 3 status line.
fn index(db: &Arc<Mutex<Db>>) -> Response {
    let queries = {
        let db = db.lock().unwrap();
        db.select_last_reading()
            .and_then(|reading| Ok((reading, db.select_washer_3_last_on()?)))
    };
    let body = match queries.log(|| "summary queries failed") {
        Ok((reading, last_on)) => templates::index::Index {
            reading,
            last_on: format::last_on_string(last_on),
        }
        .to_string(),
        Err(_) => templates::index::Unavailable {}.to_string(),
    };
    page(body)
}

/// The history page: one page of readings at the requested offset, thinned.
fn data(request: &Request, db: &Arc<Mutex<Db>>) -> Response {
    // The offset defaults to zero; malformed or negative values fall back to it.
    let offset = request
        .get_param("s")
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|s| *s >= 0)
        .unwrap_or(0);
    let result = { db.lock().unwrap().select_readings(offset) };
    let body = match result.log(|| "history query failed") {
        Ok(readings) => templates::data::Data {
            readings: thinning::thin(readings),
            offset,
        }
        .to_string(),
        Err(_) => templates::index::Unavailable {}.to_string(),
    };
    page(body)
}

/// Ingestion endpoint.
fn post(request: &Request, settings: &Settings, db: &Arc<Mutex<Db>>) -> Response {
    let body: IngestRequest = match rouille::input::json_input(request) {
        Ok(body) => body,
        Err(error) => {
            warn!("Rejecting an unreadable body: {}", error);
            return Response::text("Write to database unsuccessful.").with_status_code(400);
        }
    };
    let payload = match body.validate(&settings.access_key) {
        Ok(payload) => payload,
        Err(IngestError::Forbidden) => {
            warn!("Rejecting a write with a wrong access key");
            return Response::text("Forbidden.").with_status_code(403);
        }
        Err(error) => {
            warn!("Rejecting a malformed payload: {}", error);
            return Response::text("Write to database unsuccessful.").with_status_code(400);
        }
    };
    let result = {
        let db = db.lock().unwrap();
        ingest::ingest(&db, payload, settings.write_error_policy)
    };
    match result.log(|| "write failed") {
        Ok(()) => Response::text("Write to database successful."),
        Err(_) => Response::text("Write to database unsuccessful.").with_status_code(500),
    }
}

fn page(body: String) -> Response {
    Response::html(templates::base::Base { body }.to_string())
}
