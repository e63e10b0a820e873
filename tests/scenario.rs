use approx::assert_relative_eq;
use planet_sim::scatter::scatter;
use planet_sim::{
    Body, BodyId, Color, Config, DrawCommand, DrawList, IdAllocator, Material, SphereRenderer,
    Trail,
};
use ultraviolet::Vec3;

#[test]
fn unit_planet_pushed_for_one_second() {
    let mut body = Body::new(BodyId::new(1).unwrap(), Vec3::zero(), Vec3::zero(), 1.0).unwrap();
    assert_relative_eq!(body.mass(), 20943.95, max_relative = 1e-6);

    body.add_force(Vec3::new(5000.0, 0.0, 0.0));
    body.update(1.0);

    assert_relative_eq!(body.vel.x, 0.238732, max_relative = 1e-5);
    assert_relative_eq!(body.pos.x, 0.238732, max_relative = 1e-5);
    assert_eq!(body.vel.y, 0.0);
    assert_eq!(body.pos.z, 0.0);
    assert_eq!(body.force, Vec3::zero());
}

#[test]
fn direct_field_writes_are_consumed_like_add_force() {
    let id = BodyId::new(9).unwrap();
    let mut a = Body::new(id, Vec3::zero(), Vec3::zero(), 1.5).unwrap();
    let mut b = a.clone();

    a.add_force(Vec3::new(1.0, 2.0, 3.0));
    b.force += Vec3::new(1.0, 2.0, 3.0);
    a.update(0.1);
    b.update(0.1);

    assert_eq!(a.pos, b.pos);
    assert_eq!(a.vel, b.vel);
}

#[test]
fn constant_force_matches_closed_form() {
    // Semi-implicit Euler under constant acceleration a for n steps of dt:
    // v = n·a·dt, x = a·dt²·n(n+1)/2.
    let mut body = Body::new(BodyId::new(0).unwrap(), Vec3::zero(), Vec3::zero(), 1.0).unwrap();
    let accel = 2.0;
    let dt = 0.1;
    let n = 10;
    for _ in 0..n {
        body.add_force(Vec3::new(0.0, 0.0, accel * body.mass()));
        body.update(dt);
    }
    let n = n as f32;
    assert_relative_eq!(body.vel.z, n * accel * dt, max_relative = 1e-4);
    assert_relative_eq!(body.pos.z, accel * dt * dt * n * (n + 1.0) / 2.0, max_relative = 1e-4);
}

#[test]
fn config_driven_cloud_steps_and_draws() {
    let mut config = Config::default();
    config.demo.bodies = 16;
    config.trail.enabled = true;
    config.trail.capacity = 8;

    let material = config.body.material().unwrap();
    let mut ids = IdAllocator::new();
    let mut bodies: Vec<Body> = scatter(config.demo.bodies, &config.scatter, &mut ids, &material)
        .unwrap()
        .into_iter()
        .map(|b| b.with_trail(Trail::from_config(&config.trail)))
        .collect();

    for _ in 0..20 {
        for body in bodies.iter_mut() {
            let pull = -body.pos.normalized() * body.mass();
            body.add_force(pull);
            body.update(config.demo.dt);
            assert_eq!(body.force, Vec3::zero());
        }
    }

    let mut list = DrawList::new();
    let color = Color::new(255, 255, 255, 255);
    for body in &bodies {
        body.draw(&mut list, color);
        assert_eq!(body.trail().unwrap().len(), 8);
    }
    assert_eq!(list.spheres().count(), 16);
    assert_eq!(list.lines().count(), 16 * 7);
}

#[test]
fn custom_renderer_receives_body_geometry() {
    struct Collect(Vec<(Vec3, f32)>);
    impl SphereRenderer for Collect {
        fn draw_sphere(&mut self, center: Vec3, radius: f32, _color: Color) {
            self.0.push((center, radius));
        }
        fn draw_line(&mut self, _from: Vec3, _to: Vec3, _color: Color) {}
    }

    let material = Material::new(1.0).unwrap();
    let body = Body::with_material(
        BodyId::new(3).unwrap(),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::zero(),
        0.5,
        material,
    )
    .unwrap();

    let mut out = Collect(Vec::new());
    body.draw(&mut out, Color::new(0, 0, 0, 255));
    assert_eq!(out.0, vec![(Vec3::new(1.0, 1.0, 1.0), 0.5)]);

    let mut list = DrawList::new();
    body.draw(&mut list, Color::new(0, 0, 0, 255));
    assert!(matches!(list.commands[0], DrawCommand::Sphere { radius, .. } if radius == 0.5));
}
