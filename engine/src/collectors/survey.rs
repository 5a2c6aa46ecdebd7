use crate::{
    collectors::{
        Collector,
        ReplyCollector,
    },
    metrics::Aggregate,
    ranking::{
        rank,
        SortOrder,
    },
    report::Report,
};
use eyre::Result;
use server_survey_config::SortKey;
use std::{
    future::Future,
    pin::Pin,
    time::Duration,
};

/// How a survey presents what it collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyOptions {
    pub sort: SortKey,
    pub order: SortOrder,
    /// Shorten the name and host columns.
    pub compact: bool,
    /// Rank the JSON document too; otherwise it keeps arrival order.
    pub rank_json: bool,
}

impl Default for SurveyOptions {
    fn default() -> Self {
        Self {
            sort: SortKey::default(),
            order: SortOrder::default(),
            compact: true,
            rank_json: false,
        }
    }
}

/// One survey run: collect, then rank and report
pub struct Survey {
    reply_collector: ReplyCollector,
    options: SurveyOptions,
    aggregate: Option<Aggregate>,
}

impl Survey {
    pub fn new(reply_collector: ReplyCollector, options: SurveyOptions) -> Self {
        Self {
            reply_collector,
            options,
            aggregate: None,
        }
    }

    /// What the last [`Collector::collect`] gathered.
    pub fn aggregate(&self) -> Option<&Aggregate> {
        self.aggregate.as_ref()
    }

    pub fn report(&self) -> Option<Report> {
        let aggregate = self.aggregate.as_ref()?;
        let ranked = rank(&aggregate.records, self.options.sort, self.options.order);
        Some(Report::compose(
            &ranked,
            &aggregate.totals,
            &aggregate.clusters,
            self.options.compact,
        ))
    }
}

impl Collector for Survey {
    fn collect(
        &mut self,
        expected: usize,
        window: Duration,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            self.aggregate = None;
            let aggregate = self.reply_collector.collect(expected, window).await?;
            self.aggregate = Some(aggregate);
            Ok(())
        })
    }

    fn format(&self) -> String {
        match self.report() {
            Some(report) => report.render(),
            None => "No servers surveyed yet. Call collect() first.".to_string(),
        }
    }

    fn summary(&self) -> serde_json::Value {
        let aggregate = match &self.aggregate {
            Some(a) => a,
            None => return serde_json::json!({ "error": "No servers surveyed yet. Call collect() first." }),
        };

        if self.options.rank_json {
            serde_json::json!(rank(&aggregate.records, self.options.sort, self.options.order))
        } else {
            serde_json::json!(aggregate.records)
        }
    }

    fn name(&self) -> &'static str {
        "Survey"
    }
}
