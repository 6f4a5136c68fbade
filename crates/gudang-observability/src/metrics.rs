//! Per-request timing metrics.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use gudang_core::RequestId;
use serde::{Deserialize, Serialize};

/// Metrics for a single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first section (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_section_us: Option<u64>,
    /// Section timings.
    pub sections: HashMap<String, SectionMetrics>,
    /// Fetch timings keyed by dependency tag.
    pub dependencies: HashMap<String, DependencyMetrics>,
    /// Sections whose data arrived after the client went away.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped_sections: Vec<String>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Section name.
    pub name: String,
    /// Time from request start to section start (microseconds).
    pub start_us: u64,
    /// Time from request start to section sent (microseconds).
    pub sent_us: u64,
    /// Section duration (microseconds).
    pub duration_us: u64,
    /// Bytes sent for this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Whether the section rendered its error state.
    pub used_fallback: bool,
}

/// Metrics for one dependency fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyMetrics {
    /// Dependency tag.
    pub tag: String,
    /// Operation or URL fetched.
    pub target: String,
    /// Fetch duration (microseconds).
    pub duration_us: u64,
    /// Whether the fetch succeeded.
    pub success: bool,
    /// Error message if failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Collector for request metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    first_section_sent: Option<Instant>,
    sections: HashMap<String, SectionMetricsBuilder>,
    dependencies: HashMap<String, DependencyMetrics>,
    dropped_sections: Vec<String>,
}

#[derive(Debug)]
struct SectionMetricsBuilder {
    start: Instant,
    sent: Option<Instant>,
    bytes: Option<usize>,
    used_fallback: bool,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            first_section_sent: None,
            sections: HashMap::new(),
            dependencies: HashMap::new(),
            dropped_sections: Vec::new(),
        }
    }

    /// Set workload name.
    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    /// Set route path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record shell sent.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Record section start.
    pub fn record_section_start(&mut self, name: &str) {
        self.sections.insert(
            name.to_string(),
            SectionMetricsBuilder {
                start: Instant::now(),
                sent: None,
                bytes: None,
                used_fallback: false,
            },
        );
    }

    /// Record section sent.
    pub fn record_section_sent(&mut self, name: &str, bytes: Option<usize>, used_fallback: bool) {
        let now = Instant::now();
        self.first_section_sent.get_or_insert(now);

        let section = self
            .sections
            .entry(name.to_string())
            .or_insert(SectionMetricsBuilder {
                start: now,
                sent: None,
                bytes: None,
                used_fallback: false,
            });
        section.sent = Some(now);
        section.bytes = bytes;
        section.used_fallback = used_fallback;
    }

    /// Record a section whose result was discarded.
    pub fn record_section_dropped(&mut self, name: &str) {
        self.dropped_sections.push(name.to_string());
    }

    /// Record a dependency fetch.
    pub fn record_dependency(
        &mut self,
        tag: &str,
        target: &str,
        duration: Duration,
        error: Option<String>,
    ) {
        self.dependencies.insert(
            tag.to_string(),
            DependencyMetrics {
                tag: tag.to_string(),
                target: target.to_string(),
                duration_us: duration.as_micros() as u64,
                success: error.is_none(),
                error,
            },
        );
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        let now = Instant::now();
        let start = self.start;
        let micros = |t: Instant| t.duration_since(start).as_micros() as u64;

        let sections = self
            .sections
            .into_iter()
            .map(|(name, builder)| {
                let sent = builder.sent.unwrap_or(now);
                (
                    name.clone(),
                    SectionMetrics {
                        name,
                        start_us: micros(builder.start),
                        sent_us: micros(sent),
                        duration_us: sent.duration_since(builder.start).as_micros() as u64,
                        bytes: builder.bytes,
                        used_fallback: builder.used_fallback,
                    },
                )
            })
            .collect();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            route: self.route,
            time_to_shell_us: self.shell_sent.map(micros),
            time_to_first_section_us: self.first_section_sent.map(micros),
            sections,
            dependencies: self.dependencies,
            dropped_sections: self.dropped_sections,
            total_duration_us: micros(now),
            status_code,
        }
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let ms = |us: u64| us as f64 / 1000.0;
        let mut lines = vec![format!(
            "Request: {} [{}]",
            self.request_id,
            self.status_code.unwrap_or(0)
        )];

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!("  Time to shell: {:.2}ms", ms(tts)));
        }
        if let Some(ttfs) = self.time_to_first_section_us {
            lines.push(format!("  Time to first section: {:.2}ms", ms(ttfs)));
        }
        lines.push(format!("  Total: {:.2}ms", ms(self.total_duration_us)));

        if !self.sections.is_empty() {
            let mut names: Vec<&String> = self.sections.keys().collect();
            names.sort();
            lines.push("  Sections:".to_string());
            for name in names {
                let section = &self.sections[name];
                let fallback = if section.used_fallback { " [fallback]" } else { "" };
                lines.push(format!(
                    "    {}: {:.2}ms{}",
                    name,
                    ms(section.duration_us),
                    fallback
                ));
            }
        }

        if !self.dependencies.is_empty() {
            lines.push("  Dependencies:".to_string());
            let mut deps: Vec<&DependencyMetrics> = self.dependencies.values().collect();
            deps.sort_by(|a, b| a.tag.cmp(&b.tag));
            for dep in deps {
                let status = if dep.success { "ok" } else { "FAILED" };
                lines.push(format!(
                    "    {} [{}]: {:.2}ms - {}",
                    dep.tag,
                    status,
                    ms(dep.duration_us),
                    dep.target
                ));
            }
        }

        if !self.dropped_sections.is_empty() {
            lines.push(format!("  Dropped: {}", self.dropped_sections.join(", ")));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_records_sections_and_dependencies() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("req-9"));
        metrics.set_workload("storefront");
        metrics.set_route("/");
        metrics.record_shell_sent();
        metrics.record_section_start("banners");
        metrics.record_dependency("banners", "runQuery banners", Duration::from_millis(12), None);
        metrics.record_section_sent("banners", Some(420), false);
        metrics.record_dependency(
            "brands",
            "runQuery brands",
            Duration::from_millis(3),
            Some("HTTP 503".to_string()),
        );
        metrics.record_section_sent("brands", Some(80), true);
        metrics.record_section_dropped("catalog-preview");

        let report = metrics.finalize(Some(200));
        assert_eq!(report.status_code, Some(200));
        assert!(report.time_to_shell_us.is_some());
        assert!(report.time_to_first_section_us.is_some());
        assert_eq!(report.sections["banners"].bytes, Some(420));
        assert!(report.sections["brands"].used_fallback);
        assert!(report.dependencies["banners"].success);
        assert!(!report.dependencies["brands"].success);
        assert_eq!(report.dropped_sections, vec!["catalog-preview"]);

        let summary = report.to_summary();
        assert!(summary.contains("Request: req-9 [200]"));
        assert!(summary.contains("brands [FAILED]"));
        assert!(summary.contains("[fallback]"));
        assert!(summary.contains("Dropped: catalog-preview"));
    }

    #[test]
    fn test_metrics_json_round_trip() {
        let metrics = MetricsCollector::new(RequestId::from_string("req-2")).finalize(Some(404));
        let parsed: RequestMetrics = serde_json::from_str(&metrics.to_json()).unwrap();
        assert_eq!(parsed.status_code, Some(404));
        assert!(parsed.sections.is_empty());
    }
}
