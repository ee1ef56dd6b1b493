use bytes::Bytes;
use chrono_tz::Tz;
use http_body_util::{BodyExt, Full, LengthLimitError, Limited};
use hyper::{
    body::{Body, Incoming},
    header::{HeaderValue, CONTENT_TYPE},
    service::Service,
    Method, Request, Response, StatusCode,
};
use serde::Serialize;
use tracing::{debug, error, warn};
use url_escape::decode;

use std::{collections::HashMap, error::Error, future::Future, pin::Pin};

use crate::{
    config::Config,
    error::StorefrontResult,
    pricing::{OrderSummary, PaymentMethod},
    timing::{
        clock::{from_epoch_millis, now_in},
        parse_operating_days, BusinessSchedule,
    },
};

use super::myresponse::{
    CartSummaryRequest, DaysResponse, LabelResponse, OpenAtResponse, PaymentCodeResponse,
};

/// Largest request body read on any route. A cart is a few KB.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// The Server
///
/// Handles every API endpoint. The hours and pricing logic itself lives in `timing` and
/// `pricing`; this struct only turns requests into calls and results into JSON.
///
/// Each TCP connection gets its own clone. Nothing here is mutable, so clones are cheap
/// and need no locking.
#[derive(Clone, Debug)]
pub struct Server {
    timezone: Tz,
    brown_bag_unit_price: f64,
}

impl Server {
    pub fn setup(timezone: Tz, brown_bag_unit_price: f64) -> Self {
        Self {
            timezone,
            brown_bag_unit_price,
        }
    }

    pub fn from_config(config: &Config) -> StorefrontResult<Self> {
        Ok(Self::setup(config.timezone()?, config.brown_bag_unit_price))
    }

    /// Parses the query parameters and returns a `hashmap` of key pair values.
    /// `+` is read as a space. Returns `None` if the parameters are malformed.
    fn parse_params(text: &str) -> Option<HashMap<String, String>> {
        let mut map: HashMap<String, String> = HashMap::new();
        for pairs in text.split('&') {
            let mut iterator = pairs.split('=');
            let key = decode(&iterator.next()?.replace('+', " ")).to_string();
            let value = decode(&iterator.next()?.replace('+', " ")).to_string();
            map.insert(key, value);
        }
        Some(map)
    }

    fn params(query: Option<&str>) -> Result<HashMap<String, String>, &'static str> {
        let Some(query) = query else {
            return Err("Parameters not provided.");
        };
        Self::parse_params(query).ok_or("Malformed Parameters.")
    }

    fn parse_flag(value: &str) -> Option<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }

    /// Builds a schedule from `openingTime`, `closingTime`, `businessDays` and the
    /// optional `isActive` (defaults to active).
    fn schedule_from_params(map: &HashMap<String, String>) -> Result<BusinessSchedule, String> {
        let Some(opening_time) = map.get("openingTime") else {
            return Err("openingTime not provided.".to_string());
        };
        let Some(closing_time) = map.get("closingTime") else {
            return Err("closingTime not provided.".to_string());
        };
        let business_days = map.get("businessDays").map(String::as_str).unwrap_or("");
        let is_active = match map.get("isActive") {
            None => true,
            Some(flag) => match Self::parse_flag(flag) {
                Some(flag) => flag,
                None => return Err("Malformed isActive.".to_string()),
            },
        };
        let schedule = BusinessSchedule::new(opening_time, closing_time, business_days, is_active);
        if !schedule.daily().is_valid() {
            warn!(
                opening_time = %schedule.opening_time,
                closing_time = %schedule.closing_time,
                "Malformed business hours, treating as closed"
            );
        }
        Ok(schedule)
    }

    fn parse_millis(value: &str) -> Option<i64> {
        value.trim().parse().ok()
    }

    /// GET /api/hours/days
    fn operating_days(query: Option<&str>) -> Response<Full<Bytes>> {
        let map = match Self::params(query) {
            Ok(map) => map,
            Err(message) => return Self::bad_request(message),
        };
        let Some(business_days) = map.get("businessDays") else {
            return Self::bad_request("businessDays not provided.");
        };
        let days = parse_operating_days(business_days);
        Self::ok_data(DaysResponse::new(days.indices()))
    }

    /// GET /api/hours/status
    ///
    /// Evaluated at `at` (epoch millis) when given, otherwise at the current time in the
    /// configured timezone.
    fn status(&self, query: Option<&str>) -> Response<Full<Bytes>> {
        let map = match Self::params(query) {
            Ok(map) => map,
            Err(message) => return Self::bad_request(message),
        };
        let schedule = match Self::schedule_from_params(&map) {
            Ok(schedule) => schedule,
            Err(message) => return Self::bad_request(&message),
        };
        let at = match map.get("at") {
            None => now_in(self.timezone),
            Some(at) => {
                let at = Self::parse_millis(at)
                    .and_then(|millis| from_epoch_millis(millis, self.timezone));
                match at {
                    Some(at) => at,
                    None => return Self::bad_request("Malformed at."),
                }
            }
        };
        Self::ok_data(schedule.status_at(&at))
    }

    /// GET /api/hours/open-at
    fn open_at(&self, query: Option<&str>) -> Response<Full<Bytes>> {
        let map = match Self::params(query) {
            Ok(map) => map,
            Err(message) => return Self::bad_request(message),
        };
        let schedule = match Self::schedule_from_params(&map) {
            Ok(schedule) => schedule,
            Err(message) => return Self::bad_request(&message),
        };
        let Some(at) = map.get("at") else {
            return Self::bad_request("at not provided.");
        };
        let Some(millis) = Self::parse_millis(at) else {
            return Self::bad_request("Malformed at.");
        };
        match schedule.will_be_open_at_millis(millis, self.timezone) {
            Some(is_open) => Self::ok_data(OpenAtResponse::new(is_open, millis)),
            None => Self::bad_request("Malformed at."),
        }
    }

    /// GET /api/hours/label
    fn label(query: Option<&str>) -> Response<Full<Bytes>> {
        let map = match Self::params(query) {
            Ok(map) => map,
            Err(message) => return Self::bad_request(message),
        };
        let schedule = match Self::schedule_from_params(&map) {
            Ok(schedule) => schedule,
            Err(message) => return Self::bad_request(&message),
        };
        let twenty_four_hours = match map.get("twentyFourHours") {
            None => false,
            Some(flag) => match Self::parse_flag(flag) {
                Some(flag) => flag,
                None => return Self::bad_request("Malformed twentyFourHours."),
            },
        };
        Self::ok_data(LabelResponse::new(schedule.hours_label(twenty_four_hours)))
    }

    /// POST /api/cart/summary
    fn cart_summary(&self, body: &[u8]) -> Response<Full<Bytes>> {
        let request: CartSummaryRequest = match serde_json::from_slice(body) {
            Ok(request) => request,
            Err(err) => return Self::bad_request(&format!("Malformed cart.\n{}", err)),
        };
        let summary = OrderSummary::compute(
            &request.packs,
            request.brown_bag_quantity,
            self.brown_bag_unit_price,
            request.discount,
            request.delivery_fee,
            request.service_fee,
        );
        Self::ok_data(summary)
    }

    /// GET /api/payment-method
    fn payment_method(query: Option<&str>) -> Response<Full<Bytes>> {
        let map = match Self::params(query) {
            Ok(map) => map,
            Err(message) => return Self::bad_request(message),
        };
        let Some(label) = map.get("label") else {
            return Self::bad_request("label not provided.");
        };
        match PaymentMethod::from_display_label(label) {
            Ok(method) => Self::ok_data(PaymentCodeResponse::new(label.clone(), method.api_code())),
            Err(err) => Self::bad_request(&err.to_string()),
        }
    }

    /// Reads the body, capped at [`MAX_BODY_BYTES`], then dispatches the request.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Full<Bytes>>
    where
        B: Body,
        B::Error: Into<Box<dyn Error + Send + Sync>>,
    {
        let (parts, body) = req.into_parts();
        let body = match Limited::new(body, MAX_BODY_BYTES).collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
                return Self::payload_too_large();
            }
            Err(err) => return Self::bad_request(&format!("Could not read body.\n{}", err)),
        };
        self.route(&parts.method, parts.uri.path(), parts.uri.query(), &body)
    }

    /// Dispatches one request. The body has already been read in full.
    pub fn route(
        &self,
        method: &Method,
        path: &str,
        query: Option<&str>,
        body: &[u8],
    ) -> Response<Full<Bytes>> {
        debug!(%method, path, "Request");
        match (method, path) {
            (&Method::GET, "/api/hours/days") => Self::operating_days(query),
            (&Method::GET, "/api/hours/status") => self.status(query),
            (&Method::GET, "/api/hours/open-at") => self.open_at(query),
            (&Method::GET, "/api/hours/label") => Self::label(query),
            (&Method::POST, "/api/cart/summary") => self.cart_summary(body),
            (&Method::GET, "/api/payment-method") => Self::payment_method(query),
            _ => Self::not_found(""),
        }
    }

    fn json_response(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
        let mut res = Response::new(Full::new(body));
        *res.status_mut() = status;
        res.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        res
    }

    fn error_body(message: &str) -> Bytes {
        Bytes::from(serde_json::json!({ "error": message }).to_string())
    }

    /// Return a 200 OK response with the data provided.
    fn ok_data<T: Serialize>(body: T) -> Response<Full<Bytes>> {
        match serde_json::to_string(&body) {
            Ok(data) => Self::json_response(StatusCode::OK, Bytes::from(data)),
            Err(err) => Self::server_error(&err.to_string()),
        }
    }

    /// Return a 500 Internal Server Error response with the message provided.
    fn server_error(message: &str) -> Response<Full<Bytes>> {
        error!(message, "Internal server error");
        Self::json_response(StatusCode::INTERNAL_SERVER_ERROR, Self::error_body(message))
    }

    /// Return a 404 Not Found response. Leave the message empty for no body.
    fn not_found(message: &str) -> Response<Full<Bytes>> {
        let body = if message.is_empty() {
            Bytes::new()
        } else {
            Self::error_body(message)
        };
        Self::json_response(StatusCode::NOT_FOUND, body)
    }

    /// Return a 413 Payload Too Large response.
    fn payload_too_large() -> Response<Full<Bytes>> {
        warn!(limit = MAX_BODY_BYTES, "Request body too large");
        Self::json_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            Self::error_body("Request body too large."),
        )
    }

    /// Return a 400 Bad Request response with the message provided.
    fn bad_request(message: &str) -> Response<Full<Bytes>> {
        warn!(message, "Bad request");
        Self::json_response(StatusCode::BAD_REQUEST, Self::error_body(message))
    }
}

impl Service<Request<Incoming>> for Server {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let server = self.clone();
        Box::pin(async move { Ok(server.handle(req).await) })
    }
}
