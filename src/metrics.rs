/*
Copyright 2025

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Injected counter-sink interface for decode observability.
//!
//! The parser notifies the sink after each full-message decode and after
//! each completed reassembly attempt. The sink is a pure observer: it has
//! no influence on control flow, and the default implementation discards
//! every observation. Collaborating systems that maintain counters
//! implement [`MetricsSink`] and hand it to
//! [`NmeaParser::with_metrics`](crate::NmeaParser::with_metrics).

/// Observer notified about decode and reassembly outcomes.
pub trait MetricsSink {
    /// Called once per full-message decode with the outcome.
    fn record_parse_result(&self, success: bool);

    /// Called once per completed multi-part reassembly with the outcome
    /// of parsing the joined payload.
    fn record_reassembly_attempt(&self, success: bool);
}

/// Sink that discards every observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMetrics;

impl MetricsSink for NullMetrics {
    fn record_parse_result(&self, _success: bool) {}

    fn record_reassembly_attempt(&self, _success: bool) {}
}
