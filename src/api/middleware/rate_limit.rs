// src/api/middleware/rate_limit.rs

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::{debug, warn};
use std::rc::Rc;

use crate::api::error::ApiError;
use crate::core::rate_limit::RateLimiter;

// The RateLimit transform wraps routes with a per-client admission gate.
pub struct RateLimit;

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
}

fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
    let (req, _) = req.into_parts();
    let response = error.error_response().map_into_right_body();
    ServiceResponse::new(req, response)
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // Let CORS preflight requests through the gate
        if req.method() == actix_web::http::Method::OPTIONS {
            let fut = service.call(req);
            return Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) });
        }

        // Client identity: real IP when forwarded, else peer address
        let client_id = req
            .connection_info()
            .realip_remote_addr()
            .map(str::to_string)
            .unwrap_or_else(|| "unknown".to_string());

        let allowed = match req.app_data::<web::Data<RateLimiter>>() {
            Some(limiter) => Some(limiter.allow(&client_id)),
            // Limiter not registered: misconfigured app, fail closed
            None => None,
        };

        match allowed {
            Some(true) => {
                debug!("Rate limit check passed for {}", client_id);
                let fut = service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
            Some(false) => {
                warn!("Rate limit exceeded for {}", client_id);
                Box::pin(ready(Ok(reject(req, ApiError::RateLimited))))
            }
            None => {
                warn!("Rate limiter missing from app data, rejecting request");
                Box::pin(ready(Ok(reject(req, ApiError::Internal))))
            }
        }
    }
}
