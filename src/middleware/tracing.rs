// ABOUTME: Per-request tracing span for the HTTP router
// ABOUTME: Declares the fields later filled in by authentication and handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use axum::body::Body;
use http::Request;
use tracing::field::Empty;
use tracing::Span;

use crate::constants::http_headers;

/// Create the span wrapping one HTTP request
///
/// `user_id` starts empty and is recorded once a bearer token validates.
pub fn create_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(http_headers::REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
        user_id = Empty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthManager;
    use crate::middleware::require_user;
    use chrono::Utc;
    use http::header::AUTHORIZATION;
    use http::{HeaderMap, HeaderValue};
    use oceansafe_core::models::User;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::subscriber::with_default;
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;
    use uuid::Uuid;

    /// Collects every `user_id` value recorded on any span
    #[derive(Clone, Default)]
    struct UserIdCapture(Arc<Mutex<Vec<String>>>);

    impl Visit for UserIdCapture {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "user_id" {
                self.0.lock().unwrap().push(format!("{value:?}"));
            }
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "user_id" {
                self.0.lock().unwrap().push(value.to_owned());
            }
        }
    }

    impl<S: Subscriber> Layer<S> for UserIdCapture {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            attrs.record(&mut self.clone());
        }

        fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
            values.record(&mut self.clone());
        }
    }

    fn request() -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri("/api/conditions?activity=surfing")
            .header(http_headers::REQUEST_ID, "req-42")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn test_request_span_declares_user_id() {
        let subscriber = tracing_subscriber::registry();
        with_default(subscriber, || {
            let span = create_request_span(&request());
            let fields = span.metadata().unwrap().fields();
            assert!(fields.field("user_id").is_some());
            assert!(fields.field("request_id").is_some());
            assert!(fields.field("path").is_some());
        });
    }

    #[test]
    fn test_authentication_records_user_id_on_request_span() {
        let capture = UserIdCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        let auth = AuthManager::new(b"span-secret", 1, 4);
        let user = User {
            id: Uuid::new_v4(),
            email: "span@b.co".to_owned(),
            full_name: "Span".to_owned(),
            password_hash: String::new(),
            created_at: Utc::now(),
        };
        let (token, _) = auth.generate_token(&user).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );

        with_default(subscriber, || {
            let span = create_request_span(&request());
            let _entered = span.enter();
            require_user(&headers, &auth).unwrap();
        });

        let recorded = capture.0.lock().unwrap().clone();
        assert_eq!(recorded, vec![user.id.to_string()]);
    }
}
