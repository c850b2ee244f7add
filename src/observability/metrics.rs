use prometheus::{Encoder, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub position_reports_total: IntCounterVec,
    pub report_latency_seconds: HistogramVec,
    pub radius_queries_total: IntCounterVec,
    pub distance_queries_total: IntCounterVec,
    pub tracked_entities: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let position_reports_total = IntCounterVec::new(
            Opts::new("position_reports_total", "Position reports by outcome"),
            &["outcome"],
        )
        .expect("valid position_reports_total metric");

        let report_latency_seconds = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "report_latency_seconds",
                "Latency of position report processing in seconds",
            ),
            &["outcome"],
        )
        .expect("valid report_latency_seconds metric");

        let radius_queries_total = IntCounterVec::new(
            Opts::new("radius_queries_total", "Radius searches by outcome"),
            &["outcome"],
        )
        .expect("valid radius_queries_total metric");

        let distance_queries_total = IntCounterVec::new(
            Opts::new(
                "distance_queries_total",
                "Distance-traveled queries by outcome",
            ),
            &["outcome"],
        )
        .expect("valid distance_queries_total metric");

        let tracked_entities = IntGauge::new(
            "tracked_entities",
            "Number of usernames with a current position",
        )
        .expect("valid tracked_entities metric");

        registry
            .register(Box::new(position_reports_total.clone()))
            .expect("register position_reports_total");
        registry
            .register(Box::new(report_latency_seconds.clone()))
            .expect("register report_latency_seconds");
        registry
            .register(Box::new(radius_queries_total.clone()))
            .expect("register radius_queries_total");
        registry
            .register(Box::new(distance_queries_total.clone()))
            .expect("register distance_queries_total");
        registry
            .register(Box::new(tracked_entities.clone()))
            .expect("register tracked_entities");

        Self {
            registry,
            position_reports_total,
            report_latency_seconds,
            radius_queries_total,
            distance_queries_total,
            tracked_entities,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
