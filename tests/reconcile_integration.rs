//! Integration tests for the server-state reconciliation path: periodic
//! polling, feed outcomes, and the fetch-and-apply routine, driven through a
//! headless world with the network bridge built over raw channels.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use crossbeam_channel::{Receiver, Sender, unbounded};

use petdash::components::animation::Animation;
use petdash::components::pet::Pet;
use petdash::components::sprite::Sprite;
use petdash::events::chart::ChartUpdate;
use petdash::events::net::{NetCmd, NetMessage};
use petdash::game::{build_world, spawn_pet};
use petdash::resources::gameconfig::GameConfig;
use petdash::resources::input::InputState;
use petdash::resources::net::NetBridge;
use petdash::resources::registry::{Activity, BreedRegistry};
use petdash::resources::satiation::Satiation;
use petdash::systems::net::{
    apply_net_messages, poll_net_messages, poll_status_timer, send_feed_requests,
    update_bevy_chart_messages, update_bevy_net_messages,
};
use petdash::systems::time::update_world_time;

struct Harness {
    world: World,
    schedule: Schedule,
    entity: Entity,
    /// Command side of the bridge, as the network thread would see it.
    rx_cmd: Receiver<NetCmd>,
    /// Response side of the bridge, as the network thread would use it.
    tx_msg: Sender<NetMessage>,
    /// Persistent reader standing in for the chart collaborator.
    chart_reader: SystemState<MessageReader<'static, 'static, ChartUpdate>>,
}

fn make_harness() -> Harness {
    let config = GameConfig::new();
    let mut world = build_world(BreedRegistry::default(), &config);
    world.insert_resource(Messages::<NetMessage>::default());

    let (tx_cmd, rx_cmd) = unbounded::<NetCmd>();
    let (tx_msg, rx_msg) = unbounded::<NetMessage>();
    world.insert_resource(NetBridge {
        tx_cmd,
        rx_msg,
        handle: std::thread::spawn(|| {}),
    });

    let entity = spawn_pet(&mut world, 1, "husky/one", "pet-sheet", 200.0, 200.0);

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            poll_net_messages,
            update_bevy_net_messages,
            apply_net_messages,
            update_bevy_chart_messages,
        )
            .chain(),
    );

    let chart_reader = SystemState::new(&mut world);

    Harness {
        world,
        schedule,
        entity,
        rx_cmd,
        tx_msg,
        chart_reader,
    }
}

fn run_frame(h: &mut Harness) {
    update_world_time(&mut h.world, 1.0 / 60.0);
    h.schedule.run(&mut h.world);
}

fn drain_chart(h: &mut Harness) -> Vec<ChartUpdate> {
    let mut reader = h.chart_reader.get_mut(&mut h.world);
    reader.read().cloned().collect()
}

#[test]
fn status_poll_applies_satiation_activity_and_chart() {
    let mut h = make_harness();

    h.tx_msg
        .send(NetMessage::Status {
            satiation: 75,
            current_state: "RUNNING".into(),
        })
        .unwrap();
    run_frame(&mut h);

    assert_eq!(h.world.resource::<Satiation>().0, 75);

    let pet = h.world.get::<Pet>(h.entity).unwrap();
    assert_eq!(pet.activity, Activity::Running);

    let sprite = h.world.get::<Sprite>(h.entity).unwrap();
    assert_eq!(sprite.width, 74.0);
    assert_eq!(sprite.sheet_row(), 6);

    let anim = h.world.get::<Animation>(h.entity).unwrap();
    assert_eq!(anim.max_frame, 7);
    assert_eq!(anim.frame_index, 0);

    let chart = drain_chart(&mut h);
    assert_eq!(chart.len(), 1);
    assert_eq!(chart[0].satiation, 75);
    assert_eq!(chart[0].current_state, "RUNNING");
}

#[test]
fn feed_success_triggers_one_shot_refresh() {
    let mut h = make_harness();
    h.world.resource_mut::<Satiation>().set_clamped(50);

    h.tx_msg
        .send(NetMessage::FeedResult {
            success: true,
            tokens: Some(3),
            error: None,
        })
        .unwrap();
    run_frame(&mut h);

    // The apply routine requested an immediate status fetch.
    assert!(matches!(h.rx_cmd.try_recv(), Ok(NetCmd::FetchStatus)));
    assert!(h.rx_cmd.try_recv().is_err());
    // The feed result itself mutates nothing.
    assert_eq!(h.world.resource::<Satiation>().0, 50);
}

#[test]
fn feed_rejection_mutates_nothing() {
    let mut h = make_harness();
    h.world.resource_mut::<Satiation>().set_clamped(50);

    h.tx_msg
        .send(NetMessage::FeedResult {
            success: false,
            tokens: None,
            error: Some("Not enough tokens to feed the sprite.".into()),
        })
        .unwrap();
    run_frame(&mut h);

    assert_eq!(h.world.resource::<Satiation>().0, 50);
    assert!(h.rx_cmd.try_recv().is_err());
    assert!(drain_chart(&mut h).is_empty());
}

#[test]
fn request_failure_retains_last_known_state() {
    let mut h = make_harness();

    h.tx_msg
        .send(NetMessage::Status {
            satiation: 60,
            current_state: "RUNNING".into(),
        })
        .unwrap();
    run_frame(&mut h);
    drain_chart(&mut h);

    h.tx_msg
        .send(NetMessage::RequestFailed {
            what: "status",
            error: "connection refused".into(),
        })
        .unwrap();
    run_frame(&mut h);

    assert_eq!(h.world.resource::<Satiation>().0, 60);
    let pet = h.world.get::<Pet>(h.entity).unwrap();
    assert_eq!(pet.activity, Activity::Running);
    assert!(drain_chart(&mut h).is_empty());
}

#[test]
fn unknown_activity_name_keeps_sprite_state() {
    let mut h = make_harness();

    h.tx_msg
        .send(NetMessage::Status {
            satiation: 80,
            current_state: "FLYING".into(),
        })
        .unwrap();
    run_frame(&mut h);

    // Satiation is an independent field and still applies.
    assert_eq!(h.world.resource::<Satiation>().0, 80);
    // The sprite keeps its Standing geometry.
    let pet = h.world.get::<Pet>(h.entity).unwrap();
    assert_eq!(pet.activity, Activity::Standing);
    let sprite = h.world.get::<Sprite>(h.entity).unwrap();
    assert_eq!(sprite.width, 64.0);
    assert_eq!(sprite.sheet_row(), 9);
}

#[test]
fn overlapping_responses_last_write_wins() {
    let mut h = make_harness();

    h.tx_msg
        .send(NetMessage::Status {
            satiation: 75,
            current_state: "RUNNING".into(),
        })
        .unwrap();
    h.tx_msg
        .send(NetMessage::Status {
            satiation: 30,
            current_state: "STANDING".into(),
        })
        .unwrap();
    run_frame(&mut h);

    assert_eq!(h.world.resource::<Satiation>().0, 30);
    let pet = h.world.get::<Pet>(h.entity).unwrap();
    assert_eq!(pet.activity, Activity::Standing);
    // Both payloads reached the chart, in arrival order.
    let chart = drain_chart(&mut h);
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[1].satiation, 30);
}

#[test]
fn poll_timer_requests_status_on_its_interval() {
    let mut h = make_harness();
    let mut schedule = Schedule::default();
    schedule.add_systems(poll_status_timer);

    // Default interval is 61 s; one big delta must fire exactly once.
    update_world_time(&mut h.world, 61.0);
    schedule.run(&mut h.world);
    assert!(matches!(h.rx_cmd.try_recv(), Ok(NetCmd::FetchStatus)));
    assert!(h.rx_cmd.try_recv().is_err());

    // Just after firing, a short frame does not fire again.
    update_world_time(&mut h.world, 0.016);
    schedule.run(&mut h.world);
    assert!(h.rx_cmd.try_recv().is_err());
}

#[test]
fn feed_keypress_sends_feed_command() {
    let mut h = make_harness();
    let mut schedule = Schedule::default();
    schedule.add_systems(send_feed_requests);

    h.world.resource_mut::<InputState>().feed_pressed = true;
    schedule.run(&mut h.world);
    assert!(matches!(h.rx_cmd.try_recv(), Ok(NetCmd::Feed)));

    h.world.resource_mut::<InputState>().feed_pressed = false;
    schedule.run(&mut h.world);
    assert!(h.rx_cmd.try_recv().is_err());
}
