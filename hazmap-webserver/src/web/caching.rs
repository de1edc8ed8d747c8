use rocket::{
    http::{ContentType, Header, Status},
    response::{self, Responder},
    Request, Response,
};
use serde::Serialize;

use super::api::ApiError;

/// Fixed cache policy per resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Categories,
    Images,
    Hazards,
    Moderation,
}

pub fn cache_control(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Categories => "public, max-age=86400, stale-while-revalidate=3600",
        ResourceKind::Images => "public, max-age=2592000, immutable",
        ResourceKind::Hazards => "public, max-age=60, stale-while-revalidate=30",
        ResourceKind::Moderation => "no-store",
    }
}

fn fnv1a_64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

pub fn weak_etag(body: &str) -> String {
    format!("W/\"{:016x}\"", fnv1a_64(body.as_bytes()))
}

/// JSON response with `Cache-Control` and a content-derived `ETag`.
/// A matching `If-None-Match` turns it into `304 Not Modified`.
#[derive(Debug)]
pub struct CachedJson {
    kind: ResourceKind,
    body: String,
    etag: String,
    not_modified: bool,
}

impl CachedJson {
    pub fn new<T: Serialize>(
        kind: ResourceKind,
        value: &T,
        if_none_match: Option<&str>,
    ) -> Result<Self, ApiError> {
        let body = serde_json::to_string(value).map_err(|err| anyhow::Error::from(err))?;
        let etag = weak_etag(&body);
        let not_modified = if_none_match == Some(etag.as_str());
        Ok(Self {
            kind,
            body,
            etag,
            not_modified,
        })
    }
}

/// Marks a response as uncacheable. Moderation data must never be served
/// from a shared cache.
#[derive(Debug)]
pub struct NoStore<R>(pub R);

impl<'r, 'o: 'r, R: Responder<'r, 'o>> Responder<'r, 'o> for NoStore<R> {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let mut res = self.0.respond_to(req)?;
        res.set_header(Header::new(
            "Cache-Control",
            cache_control(ResourceKind::Moderation),
        ));
        Ok(res)
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for CachedJson {
    fn respond_to(self, _req: &'r Request<'_>) -> response::Result<'o> {
        let mut builder = Response::build();
        builder
            .header(Header::new("Cache-Control", cache_control(self.kind)))
            .header(Header::new("ETag", self.etag));
        if self.not_modified {
            builder.status(Status::NotModified);
        } else {
            builder
                .header(ContentType::JSON)
                .sized_body(self.body.len(), std::io::Cursor::new(self.body));
        }
        Ok(builder.finalize())
    }
}
