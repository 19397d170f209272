// common/mod.rs - Mock inventory API for the ssr test suites
//
// Starts an actix-web server on a free local port that records every
// request and answers each endpoint with a canned status and JSON body.
// Unknown endpoints answer 404.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

/// Base path the mock serves under, like the real API
pub const BASE_PATH: &str = "/products";

/// A request as the mock received it, path relative to `BASE_PATH`
#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: Value,
}

#[derive(Default)]
struct MockState {
    replies: HashMap<String, (u16, Value)>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
    handle: ServerHandle,
}

impl MockApi {
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request reached the mock")
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// `{ok: true, result}`
pub fn ok(result: Value) -> (u16, Value) {
    (200, json!({ "ok": true, "result": result }))
}

/// `{ok: false, result: null}`
pub fn rejected() -> (u16, Value) {
    (200, json!({ "ok": false, "result": null }))
}

async fn respond(req: HttpRequest, body: web::Bytes, state: web::Data<Arc<MockState>>) -> HttpResponse {
    let path = req
        .path()
        .strip_prefix(BASE_PATH)
        .unwrap_or(req.path())
        .to_string();
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(Recorded {
        method: req.method().to_string(),
        path: path.clone(),
        body,
    });

    match state.replies.get(&path) {
        Some((status, reply)) => {
            let status = StatusCode::from_u16(*status).unwrap();
            HttpResponse::build(status).json(reply)
        }
        None => HttpResponse::NotFound().finish(),
    }
}

/// Start the mock with one reply per endpoint path (e.g. "/getAll")
pub async fn start_mock_api(replies: Vec<(&str, (u16, Value))>) -> MockApi {
    let state = Arc::new(MockState {
        replies: replies
            .into_iter()
            .map(|(path, reply)| (path.to_string(), reply))
            .collect(),
        requests: Mutex::new(Vec::new()),
    });

    let data = web::Data::new(state.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .default_service(web::to(respond))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind mock api");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    MockApi {
        base_url: format!("http://{}{}", addr, BASE_PATH),
        state,
        handle,
    }
}

/// Product JSON as the API sends it
pub fn product_json(id: i64, name: &str, key: &str, price: f64, type_id: i64) -> Value {
    json!({
        "idProduct": id,
        "productName": name,
        "key": key,
        "price": price,
        "productStatus": true,
        "typeProduct": { "idTypeProduct": type_id, "typeProductName": "Hardware" }
    })
}
