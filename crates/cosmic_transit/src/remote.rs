//! Remote-then-local transit orchestration.
//!
//! A [`RemoteTransitSource`] returns the raw JSON body of the remote
//! engine's transit endpoint. The payload is validated and normalized into a
//! [`TransitSnapshot`]; any failure along the way (transport, status,
//! timeout, shape, range) is logged and replaced by [`build_snapshot`] for
//! the same instant. Callers always get a snapshot.

use std::time::Duration;

use cosmic_time::Instant;
use cosmic_zodiac::{Element, ZodiacSign};
use serde::Deserialize;

use crate::body::Body;
use crate::error::TransitError;
use crate::snapshot::build_snapshot;
use crate::transit_types::{TransitEntry, TransitFetch, TransitOrigin, TransitSnapshot};

/// Path and query for the remote transit endpoint at `instant`.
pub fn transit_query(instant: &Instant) -> String {
    format!("/api/transits?date={}", instant.to_iso_string())
}

/// A source of remote transit payloads.
///
/// Implementations must give up after `timeout` and report
/// [`TransitError::Timeout`].
pub trait RemoteTransitSource: Send + Sync {
    /// Raw JSON body for `instant`.
    fn fetch(&self, instant: &Instant, timeout: Duration) -> Result<String, TransitError>;
}

impl<F> RemoteTransitSource for F
where
    F: Fn(&Instant, Duration) -> Result<String, TransitError> + Send + Sync,
{
    fn fetch(&self, instant: &Instant, timeout: Duration) -> Result<String, TransitError> {
        self(instant, timeout)
    }
}

/// One entry as sent by the remote engine, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteEntry {
    body: String,
    sign: String,
    degree: f64,
    #[serde(default)]
    is_retrograde: bool,
    #[serde(default)]
    element: Option<String>,
}

impl RemoteEntry {
    fn validate(self) -> Result<TransitEntry, TransitError> {
        let body: Body = self.body.parse()?;
        let sign: ZodiacSign = self
            .sign
            .parse()
            .map_err(|e: cosmic_zodiac::ZodiacError| TransitError::Payload(e.to_string()))?;
        if !self.degree.is_finite() || !(0.0..30.0).contains(&self.degree) {
            return Err(TransitError::InvalidDegree {
                body: self.body,
                degree: self.degree,
            });
        }
        // Missing or blank element: take the sign's.
        let element = match self.element.as_deref().map(str::trim) {
            None | Some("") => sign.element(),
            Some(name) => name
                .parse::<Element>()
                .map_err(|e| TransitError::Payload(e.to_string()))?,
        };
        Ok(TransitEntry {
            body,
            sign,
            degree: self.degree.floor() as u8,
            is_retrograde: self.is_retrograde,
            element,
        })
    }
}

/// Validate a remote payload: a non-empty JSON list of entries, each with
/// a known body and sign and a degree in [0, 30).
pub fn parse_remote_payload(json: &str) -> Result<TransitSnapshot, TransitError> {
    let raw: Vec<RemoteEntry> = serde_json::from_str(json)?;
    if raw.is_empty() {
        return Err(TransitError::EmptyPayload);
    }
    let entries = raw
        .into_iter()
        .map(RemoteEntry::validate)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TransitSnapshot::new(entries))
}

/// Transits for `instant` (now when `None`), preferring `remote`.
pub fn fetch_transits_for(
    instant: Option<Instant>,
    remote: Option<&dyn RemoteTransitSource>,
    timeout: Duration,
) -> TransitFetch {
    let instant = instant.unwrap_or_else(|| {
        tracing::warn!("no transit instant supplied, substituting now");
        Instant::now()
    });

    if let Some(source) = remote {
        let fetched = source
            .fetch(&instant, timeout)
            .and_then(|body| parse_remote_payload(&body));
        match fetched {
            Ok(snapshot) => {
                tracing::info!(%instant, entries = snapshot.len(), "using remote transit engine");
                return TransitFetch {
                    origin: TransitOrigin::Remote,
                    snapshot,
                };
            }
            Err(e) => {
                tracing::warn!(%instant, error = %e, "remote transit engine failed, computing locally");
            }
        }
    } else {
        tracing::debug!(%instant, "no remote transit source configured");
    }

    TransitFetch {
        origin: TransitOrigin::Local,
        snapshot: build_snapshot(&instant),
    }
}

/// Transits for the current instant, preferring `remote`.
pub fn fetch_current_transits(
    remote: Option<&dyn RemoteTransitSource>,
    timeout: Duration,
) -> TransitFetch {
    fetch_transits_for(Some(Instant::now()), remote, timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn june_first() -> Instant {
        Instant::from_calendar(2024, 6, 1, 0, 0).unwrap()
    }

    #[test]
    fn query_string() {
        assert_eq!(
            transit_query(&june_first()),
            "/api/transits?date=2024-06-01T00:00:00.000Z"
        );
    }

    #[test]
    fn payload_backfills_element() {
        let snap = parse_remote_payload(
            r#"[{"body":"Sun","sign":"Gemini","degree":11.4},
                {"body":"Moon","sign":"Pisces","degree":29,"isRetrograde":false,"element":""}]"#,
        )
        .unwrap();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap.entries()[0].element, Element::Air);
        assert_eq!(snap.entries()[0].degree, 11);
        assert_eq!(snap.entries()[1].element, Element::Water);
    }

    #[test]
    fn payload_keeps_supplied_element() {
        let snap = parse_remote_payload(
            r#"[{"body":"Mars","sign":"Libra","degree":3,"isRetrograde":true,"element":"fire"}]"#,
        )
        .unwrap();
        assert_eq!(snap.entries()[0].element, Element::Fire);
        assert!(snap.entries()[0].is_retrograde);
    }

    #[test]
    fn payload_rejections() {
        assert_eq!(parse_remote_payload("[]"), Err(TransitError::EmptyPayload));
        assert!(matches!(
            parse_remote_payload(r#"{"status":"ok"}"#),
            Err(TransitError::Payload(_))
        ));
        assert!(matches!(
            parse_remote_payload(r#"[{"sign":"Leo","degree":1}]"#),
            Err(TransitError::Payload(_))
        ));
        assert!(matches!(
            parse_remote_payload(r#"[{"body":"Sun","sign":"Ophiuchus","degree":1}]"#),
            Err(TransitError::Payload(_))
        ));
        assert!(matches!(
            parse_remote_payload(r#"[{"body":"Sun","sign":"Leo","degree":30}]"#),
            Err(TransitError::InvalidDegree { .. })
        ));
        assert!(matches!(
            parse_remote_payload(r#"[{"body":"Sun","sign":"Leo","degree":-0.5}]"#),
            Err(TransitError::InvalidDegree { .. })
        ));
        assert!(matches!(
            parse_remote_payload(r#"[{"body":"Ceres","sign":"Leo","degree":1}]"#),
            Err(TransitError::UnknownBody(_))
        ));
    }

    #[test]
    fn remote_success_is_used() {
        let remote = |_: &Instant, _: Duration| -> Result<String, TransitError> {
            Ok(r#"[{"body":"Sun","sign":"Gemini","degree":10,"isRetrograde":false}]"#.to_string())
        };
        let fetch = fetch_transits_for(Some(june_first()), Some(&remote), TIMEOUT);
        assert_eq!(fetch.origin, TransitOrigin::Remote);
        assert_eq!(fetch.snapshot.len(), 1);
    }

    #[test]
    fn remote_receives_instant_and_timeout() {
        let remote = |t: &Instant, d: Duration| -> Result<String, TransitError> {
            assert_eq!(*t, Instant::from_calendar(2024, 6, 1, 0, 0).unwrap());
            assert_eq!(d, Duration::from_millis(1234));
            Err(TransitError::Status(503))
        };
        let fetch = fetch_transits_for(Some(june_first()), Some(&remote), Duration::from_millis(1234));
        assert_eq!(fetch.origin, TransitOrigin::Local);
    }

    #[test]
    fn failures_fall_back_to_local() {
        let failures = [
            Err(TransitError::Unavailable("connection refused".into())),
            Err(TransitError::Timeout(TIMEOUT)),
            Ok("<html>".to_string()),
            Ok("[]".to_string()),
        ];
        let local = build_snapshot(&june_first());
        for outcome in failures {
            let remote = move |_: &Instant, _: Duration| outcome.clone();
            let fetch = fetch_transits_for(Some(june_first()), Some(&remote), TIMEOUT);
            assert_eq!(fetch.origin, TransitOrigin::Local);
            assert_eq!(fetch.snapshot, local);
        }
    }

    #[test]
    fn no_source_is_local() {
        let fetch = fetch_transits_for(Some(june_first()), None, TIMEOUT);
        assert_eq!(fetch.origin, TransitOrigin::Local);
        assert_eq!(fetch.snapshot.len(), 10);
    }

    #[test]
    fn missing_instant_uses_now() {
        let fetch = fetch_transits_for(None, None, TIMEOUT);
        assert_eq!(fetch.snapshot.len(), 10);
        let current = fetch_current_transits(None, TIMEOUT);
        assert_eq!(current.snapshot.len(), 10);
    }
}
