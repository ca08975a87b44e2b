//! Instrumentation emitted by the generator.

use gnpgen_core::{GnpParams, generate};
use gnpgen_test_support::tracing::RecordingLayer;
use rstest::rstest;
use tracing_subscriber::layer::SubscriberExt;

#[rstest]
fn generate_records_parameters_and_edge_count() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let params = GnpParams::new(4, 1.0, -9).expect("parameters are valid");

    let graph = tracing::subscriber::with_default(subscriber, || generate(&params));
    assert_eq!(graph.edge_count(), 6);

    let span = layer
        .span("generator.generate")
        .expect("generator.generate span must exist");
    assert_eq!(span.fields.get("vertices"), Some(&"4".to_owned()));
    assert_eq!(span.fields.get("probability"), Some(&"1".to_owned()));
    assert_eq!(span.fields.get("seed"), Some(&"-9".to_owned()));
    assert_eq!(span.fields.get("edges"), Some(&"6".to_owned()));
}
