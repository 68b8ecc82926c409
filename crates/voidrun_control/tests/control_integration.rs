//! Control integration tests
//!
//! Гоняем ControlPlugin в Bevy App без TimePlugin: dt задаём вручную через
//! `Time::advance_by`, чтобы шаг был детерминированным.

use std::time::Duration;

use bevy::prelude::*;
use voidrun_control::input::apply_raw_input;
use voidrun_control::*;

const EPS: f32 = 1e-4;

/// Очередь RawInputEvent, которую тест отправляет перед следующим frame
#[derive(Resource, Default)]
struct PendingInput(Vec<RawInputEvent>);

fn emit_pending_input(mut pending: ResMut<PendingInput>, mut events: EventWriter<RawInputEvent>) {
    for event in pending.0.drain(..) {
        events.write(event);
    }
}

/// Helper: App с ControlPlugin и ручным временем
fn create_control_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(ControlPlugin)
        .insert_resource(Time::<()>::default())
        .init_resource::<PendingInput>()
        .add_systems(PreUpdate, emit_pending_input.before(apply_raw_input));
    app
}

/// Helper: один frame длиной dt секунд
fn step(app: &mut App, dt: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(dt));
    app.update();
}

fn send(app: &mut App, events: &[RawInputEvent]) {
    app.world_mut()
        .resource_mut::<PendingInput>()
        .0
        .extend_from_slice(events);
}

fn spawn_player(app: &mut App, position: Vec3) -> (Entity, FpsColliders) {
    let spawned = spawn_fps_player(
        &mut app.world_mut().commands(),
        position,
        CameraId::PLAYER,
        FpsTuning::default(),
    );
    app.world_mut().flush();
    spawned
}

fn set_probe(app: &mut App, probe: Entity, collider: Collider) {
    let mut slot = app
        .world_mut()
        .get_mut::<Collider>(probe)
        .expect("probe entity has Collider");
    *slot = collider;
}

fn translation(app: &App, entity: Entity) -> Vec3 {
    app.world().get::<Transform>(entity).unwrap().translation
}

fn fps_state(app: &App, entity: Entity) -> FpsControl {
    app.world()
        .get::<Control>(entity)
        .and_then(Control::as_fps)
        .cloned()
        .expect("FPS control")
}

/// Test: free-fly, forward (0,0,-1), W на dt → move_speed * dt вдоль -Z
#[test]
fn test_free_fly_forward_through_app() {
    let mut app = create_control_app();
    let camera = spawn_free_camera(
        &mut app.world_mut().commands(),
        Vec3::new(1.0, 2.0, 3.0),
        CameraId::DEBUG,
        4.0,
    );
    app.world_mut().flush();

    send(&mut app, &[RawInputEvent::press(InputCode::W)]);
    step(&mut app, 0.25);

    let position = translation(&app, camera);
    assert!(
        position.abs_diff_eq(Vec3::new(1.0, 2.0, 2.0), EPS),
        "free camera at {:?}",
        position
    );
    let view = app.world().get::<ViewCamera>(camera).unwrap();
    assert_eq!(view.position, position);
}

/// Test: FPS, down probe в пределах height + 0.01 → snap + can_jump
#[test]
fn test_fps_snaps_to_ground() {
    let mut app = create_control_app();
    let (player, colliders) = spawn_player(&mut app, Vec3::new(0.0, 2.708, 0.0));
    set_probe(&mut app, colliders.down, Collider::hit(Vec3::new(0.0, 1.0, 0.0)));

    step(&mut app, 1.0 / 60.0);

    let height = FpsTuning::default().height;
    assert_eq!(translation(&app, player).y, 1.0 + height);
    let fps = fps_state(&app, player);
    assert!(fps.can_jump);
    assert_eq!(fps.ground, GroundState::Grounded);
}

/// Test: падение с высоты заканчивается на земле, без проваливания
#[test]
fn test_fps_falls_and_lands() {
    let mut app = create_control_app();
    let (player, colliders) = spawn_player(&mut app, Vec3::new(0.0, 5.0, 0.0));
    set_probe(&mut app, colliders.down, Collider::hit(Vec3::ZERO));

    let height = FpsTuning::default().height;
    for _ in 0..120 {
        step(&mut app, 1.0 / 60.0);
        assert!(translation(&app, player).y >= height - EPS);
    }

    assert_eq!(translation(&app, player).y, height);
    assert!(fps_state(&app, player).can_jump);
}

/// Test: прыжок с земли, потом приземление обратно
#[test]
fn test_fps_jump_cycle() {
    let mut app = create_control_app();
    let height = FpsTuning::default().height;
    let (player, colliders) = spawn_player(&mut app, Vec3::new(0.0, height, 0.0));
    set_probe(&mut app, colliders.down, Collider::hit(Vec3::ZERO));

    step(&mut app, 1.0 / 60.0);
    assert!(fps_state(&app, player).can_jump);

    send(&mut app, &[RawInputEvent::press(InputCode::Space)]);
    step(&mut app, 1.0 / 60.0);

    let fps = fps_state(&app, player);
    assert!(!fps.can_jump);
    assert_eq!(fps.jump_force, FpsTuning::default().jump_initial_force);
    assert!(translation(&app, player).y > height);

    send(&mut app, &[RawInputEvent::release(InputCode::Space)]);
    let mut max_height = 0.0_f32;
    for _ in 0..300 {
        step(&mut app, 1.0 / 60.0);
        max_height = max_height.max(translation(&app, player).y);
        assert!(fps_state(&app, player).jump_force >= 0.0);
    }

    assert!(max_height > height + 0.5, "jump apex {}", max_height);
    assert_eq!(translation(&app, player).y, height);
    assert!(fps_state(&app, player).can_jump);
}

/// Test: forward collider коллайдит + W → нулевое перемещение
#[test]
fn test_fps_wall_blocks_forward() {
    let mut app = create_control_app();
    let height = FpsTuning::default().height;
    let (player, colliders) = spawn_player(&mut app, Vec3::new(0.0, height, 0.0));
    set_probe(&mut app, colliders.down, Collider::hit(Vec3::ZERO));
    set_probe(&mut app, colliders.forward, Collider::hit(Vec3::new(0.0, height, -0.3)));

    send(&mut app, &[RawInputEvent::press(InputCode::W)]);
    for _ in 0..10 {
        step(&mut app, 1.0 / 60.0);
    }
    assert_eq!(translation(&app, player), Vec3::new(0.0, height, 0.0));

    // Стена убрана, идём
    set_probe(&mut app, colliders.forward, Collider::miss());
    step(&mut app, 1.0 / 60.0);
    assert!(translation(&app, player).z < 0.0);
}

/// Test: ControlContext::Menu, control step не выполняется
#[test]
fn test_menu_context_freezes_controls() {
    let mut app = create_control_app();
    let camera = spawn_free_camera(&mut app.world_mut().commands(), Vec3::ZERO, CameraId::DEBUG, 10.0);
    app.world_mut().flush();
    app.insert_resource(ControlContext::Menu);

    send(&mut app, &[RawInputEvent::press(InputCode::W)]);
    step(&mut app, 0.5);
    assert_eq!(translation(&app, camera), Vec3::ZERO);

    // Input всё равно записан, вернулись в игру, движение продолжается
    app.insert_resource(ControlContext::InGame);
    step(&mut app, 0.5);
    assert!(translation(&app, camera).z < 0.0);
}

/// Test: O → debug камера, P → камера игрока
#[test]
fn test_camera_switch_keys() {
    let mut app = create_control_app();
    let (_player, colliders) = spawn_player(&mut app, Vec3::new(0.0, 1.7, 0.0));
    set_probe(&mut app, colliders.down, Collider::hit(Vec3::ZERO));
    assert_eq!(app.world().resource::<CameraRegistry>().active, CameraId::PLAYER);

    send(&mut app, &[RawInputEvent::press(InputCode::O)]);
    step(&mut app, 1.0 / 60.0);
    assert_eq!(app.world().resource::<CameraRegistry>().active, CameraId::DEBUG);

    send(
        &mut app,
        &[RawInputEvent::release(InputCode::O), RawInputEvent::press(InputCode::P)],
    );
    step(&mut app, 1.0 / 60.0);
    assert_eq!(app.world().resource::<CameraRegistry>().active, CameraId::PLAYER);
}

/// Test: mouse look через события, delta живёт ровно один frame
#[test]
fn test_mouse_look_consumes_delta() {
    let mut app = create_control_app();
    let camera = spawn_free_camera(&mut app.world_mut().commands(), Vec3::ZERO, CameraId::DEBUG, 1.0);
    app.world_mut().flush();

    send(
        &mut app,
        &[
            RawInputEvent::press(InputCode::MouseLeft),
            RawInputEvent::MouseMoved { x: 20.0, y: 0.0 },
        ],
    );
    step(&mut app, 1.0 / 60.0);

    // 20 * 0.005 = 0.1 rad yaw
    let expected = Quat::from_axis_angle(Vec3::Y, 0.1) * Vec3::NEG_Z;
    let forward = app.world().get::<ViewCamera>(camera).unwrap().forward;
    assert!(forward.abs_diff_eq(expected, EPS), "forward {:?}", forward);
    assert_eq!(app.world().resource::<InputState>().mouse_delta(), Vec2::ZERO);

    // Курсор стоит, камера не крутится дальше
    step(&mut app, 1.0 / 60.0);
    let forward_after = app.world().get::<ViewCamera>(camera).unwrap().forward;
    assert!(forward_after.abs_diff_eq(expected, EPS));
}

/// Test: два MouseMoved за один frame, look получает суммарную delta
#[test]
fn test_mouse_look_sums_moves_within_frame() {
    let mut app = create_control_app();
    let camera = spawn_free_camera(&mut app.world_mut().commands(), Vec3::ZERO, CameraId::DEBUG, 1.0);
    app.world_mut().flush();

    send(
        &mut app,
        &[
            RawInputEvent::press(InputCode::MouseLeft),
            RawInputEvent::MouseMoved { x: 10.0, y: 0.0 },
            RawInputEvent::MouseMoved { x: 20.0, y: 0.0 },
        ],
    );
    step(&mut app, 1.0 / 60.0);

    // (10 - 0) + (20 - 10) = 20 units, 20 * 0.005 = 0.1 rad
    let expected = Quat::from_axis_angle(Vec3::Y, 0.1) * Vec3::NEG_Z;
    let forward = app.world().get::<ViewCamera>(camera).unwrap().forward;
    assert!(forward.abs_diff_eq(expected, EPS), "forward {:?}", forward);

    let input = app.world().resource::<InputState>();
    assert_eq!(input.mouse.position, Vec2::new(20.0, 0.0));
    assert_eq!(input.mouse_delta(), Vec2::ZERO);
}

/// Test: сломанный collider handle: entity пропускается, остальные обновляются, без паники
#[test]
fn test_missing_collider_skips_entity() {
    let mut app = create_control_app();
    let (player, colliders) = spawn_player(&mut app, Vec3::new(0.0, 5.0, 0.0));
    let free = spawn_free_camera(&mut app.world_mut().commands(), Vec3::ZERO, CameraId::DEBUG, 2.0);
    app.world_mut().flush();
    app.world_mut().despawn(colliders.right);

    send(&mut app, &[RawInputEvent::press(InputCode::W)]);
    step(&mut app, 0.5);

    assert_eq!(translation(&app, player), Vec3::new(0.0, 5.0, 0.0));
    assert!(translation(&app, free).abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPS));
}

/// Test: FocusLost отпускает все клавиши
#[test]
fn test_focus_lost_releases_keys() {
    let mut app = create_control_app();
    let camera = spawn_free_camera(&mut app.world_mut().commands(), Vec3::ZERO, CameraId::DEBUG, 1.0);
    app.world_mut().flush();

    send(&mut app, &[RawInputEvent::press(InputCode::W), RawInputEvent::FocusLost]);
    step(&mut app, 1.0);

    assert!(!app.world().resource::<InputState>().get_key(InputCode::W));
    assert_eq!(translation(&app, camera), Vec3::ZERO);
}
