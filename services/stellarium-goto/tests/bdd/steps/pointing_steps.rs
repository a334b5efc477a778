//! Step definitions for pointing.feature

use std::sync::Arc;

use cucumber::{given, then, when};
use stellarium_goto::{Config, GotoOutcome, GotoRunner};

use crate::world::{GotoWorld, RecordingClient};

#[given(expr = "Stellarium answers with status {int}")]
fn stellarium_answers(world: &mut GotoWorld, status: u16) {
    world.client = Some(Arc::new(RecordingClient::new(status)));
}

#[when("I point Stellarium at the file")]
async fn point_stellarium(world: &mut GotoWorld) {
    let path = world.write_file();
    let client = world
        .client
        .get_or_insert_with(|| Arc::new(RecordingClient::new(200)))
        .clone();

    let mut config = Config::default();
    config.stellarium.settle_delay_ms = 0;
    if let Some(max_blocks) = world.max_blocks {
        config.header.max_blocks = max_blocks;
    }

    match GotoRunner::new(config, client).run(&path).await {
        Ok(outcome) => {
            world.outcome = Some(outcome);
            world.last_error = None;
        }
        Err(e) => {
            world.outcome = None;
            world.last_error = Some(e.to_string());
        }
    }
}

#[then("Stellarium should receive a unit vector")]
fn receives_unit_vector(world: &mut GotoWorld) {
    let client = world.client.as_ref().expect("no client");
    let posts = client.posts.lock().unwrap();
    assert_eq!(posts.len(), 1);
    let (field, value) = &posts[0][0];
    assert_eq!(field, "j2000");

    let components: Vec<f64> = value
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|c| c.parse().expect("component is not a number"))
        .collect();
    assert_eq!(components.len(), 3);
    let magnitude = components.iter().map(|c| c * c).sum::<f64>().sqrt();
    assert!((magnitude - 1.0).abs() < 1e-9, "magnitude {magnitude}");
}

#[then(expr = "Stellarium should receive {string}")]
fn receives_exact_value(world: &mut GotoWorld, expected: String) {
    let client = world.client.as_ref().expect("no client");
    let posts = client.posts.lock().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0][0].1, expected);
}

#[then("Stellarium should receive nothing")]
fn receives_nothing(world: &mut GotoWorld) {
    if let Some(client) = world.client.as_ref() {
        assert!(client.posts.lock().unwrap().is_empty());
    }
}

#[then("the view command should be accepted")]
fn view_accepted(world: &mut GotoWorld) {
    assert!(
        matches!(world.outcome, Some(GotoOutcome::Accepted { .. })),
        "outcome {:?}, error {:?}",
        world.outcome,
        world.last_error
    );
}

#[then(expr = "the view command should be rejected with status {int}")]
fn view_rejected(world: &mut GotoWorld, status: u16) {
    assert_eq!(world.outcome, Some(GotoOutcome::Rejected { status }));
}

#[then(expr = "the error should be {string}")]
fn error_should_be(world: &mut GotoWorld, expected: String) {
    assert_eq!(world.last_error.as_deref(), Some(expected.as_str()));
}
