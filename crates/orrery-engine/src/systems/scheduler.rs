use glam::Vec3;

use crate::core::body::BodyHandle;
use crate::core::clock::SimulationClock;
use crate::core::registry::{OrbitRegistry, OrbitalParams};

/// Clock snapshot handed to post-frame observers, once per frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot {
    pub sim_time: f64,
    pub elapsed: f64,
    pub speed: f32,
    pub time_scale: f32,
    pub paused: bool,
}

type FrameObserver = Box<dyn FnMut(&FrameSnapshot)>;

struct RegisteredBody {
    id: String,
    handle: BodyHandle,
}

/// Single authoritative per-frame driver of simulated time and body
/// placement. Owns the simulation clock and the body/orbit registries.
///
/// Every operation is total: unknown identifiers degrade to silent no-ops
/// so a stray UI command can never halt the frame loop.
pub struct AnimationScheduler {
    clock: SimulationClock,
    /// Orbit center for all registered bodies.
    center: Vec3,
    /// Flat storage in registration order; counts stay small (tens).
    bodies: Vec<RegisteredBody>,
    orbits: OrbitRegistry,
    observers: Vec<FrameObserver>,
}

impl AnimationScheduler {
    pub fn new(center: Vec3) -> Self {
        Self {
            clock: SimulationClock::new(),
            center,
            bodies: Vec::new(),
            orbits: OrbitRegistry::new(),
            observers: Vec::new(),
        }
    }

    /// Attach the scheduler to the host frame loop. Idempotent.
    pub fn start(&mut self) {
        self.clock.set_running(true);
    }

    /// Detach the scheduler. Idempotent; `tick` becomes a no-op.
    pub fn stop(&mut self) {
        self.clock.set_running(false);
    }

    /// Advance simulated time and reposition every registered body.
    /// `now` is the host clock in seconds. Does nothing while stopped or
    /// paused; the caller still runs its camera update either way.
    pub fn tick(&mut self, now: f64) {
        let Some(frame_delta) = self.clock.advance(now) else {
            return;
        };
        let sim_time = self.clock.sim_time() as f32;
        for body in &self.bodies {
            let mut handle = body.handle.borrow_mut();
            if let Some(params) = self.orbits.get(&body.id) {
                handle.orbit_around(self.center, params.distance, params.angular_speed, sim_time);
            }
            handle.update(frame_delta as f32);
        }
    }

    pub fn set_paused(&mut self, paused: bool, now: f64) {
        self.clock.set_paused(paused, now);
    }

    pub fn toggle_pause(&mut self, now: f64) {
        let paused = !self.clock.is_paused();
        self.clock.set_paused(paused, now);
    }

    /// Playback speed, clamped to [0.1, 5.0] by the clock.
    pub fn set_speed(&mut self, speed: f32) {
        self.clock.set_speed(speed);
    }

    /// Overall orbital speed scale, unconstrained.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.clock.set_time_scale(time_scale);
    }

    /// Rewind simulated time to zero. Body positions are untouched until
    /// the next tick recomputes them.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Register a body handle, replacing any previous entry for `id`.
    /// Without orbital parameters the body only receives the per-frame
    /// `update` call and never moves (the stationary central body case).
    pub fn register_body(
        &mut self,
        id: impl Into<String>,
        handle: BodyHandle,
        orbit: Option<OrbitalParams>,
    ) {
        let id = id.into();
        self.remove_entry(&id);
        if let Some(params) = orbit {
            self.orbits.insert(id.clone(), params);
        }
        log::debug!("scheduler: registered body {id}");
        self.bodies.push(RegisteredBody { id, handle });
    }

    /// Drop a body and its orbit entry, if present.
    pub fn deregister_body(&mut self, id: &str) {
        if self.remove_entry(id) {
            log::debug!("scheduler: deregistered body {id}");
        }
        self.orbits.remove(id);
    }

    fn remove_entry(&mut self, id: &str) -> bool {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.swap_remove(idx);
            true
        } else {
            false
        }
    }

    pub fn update_orbit(&mut self, id: &str, distance: f32, angular_speed: f32) {
        self.orbits.update(id, distance, angular_speed);
    }

    pub fn get_orbit(&self, id: &str) -> Option<OrbitalParams> {
        self.orbits.get(id)
    }

    /// Register a post-frame observer. Observers are invoked in
    /// registration order by `notify_frame_end`, every frame, paused or not.
    pub fn add_frame_observer(&mut self, observer: impl FnMut(&FrameSnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Invoked by the frame runner after body and camera updates.
    pub fn notify_frame_end(&mut self) {
        let snapshot = FrameSnapshot {
            sim_time: self.clock.sim_time(),
            elapsed: self.clock.elapsed(),
            speed: self.clock.speed(),
            time_scale: self.clock.time_scale(),
            paused: self.clock.is_paused(),
        };
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    pub fn sim_time(&self) -> f64 {
        self.clock.sim_time()
    }

    pub fn speed(&self) -> f32 {
        self.clock.speed()
    }

    pub fn time_scale(&self) -> f32 {
        self.clock.time_scale()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn contains_body(&self, id: &str) -> bool {
        self.bodies.iter().any(|b| b.id == id)
    }

    /// Registered bodies in registration order, for render snapshotting.
    pub fn bodies(&self) -> impl Iterator<Item = (&str, &BodyHandle)> {
        self.bodies.iter().map(|b| (b.id.as_str(), &b.handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::{body_handle, CelestialBody};
    use std::f32::consts::FRAC_PI_2;

    /// Minimal body that records what the scheduler does to it.
    struct ProbeBody {
        position: Vec3,
        radius: f32,
        update_calls: u32,
        last_dt: f32,
    }

    impl ProbeBody {
        fn new(radius: f32) -> Self {
            Self {
                position: Vec3::ZERO,
                radius,
                update_calls: 0,
                last_dt: 0.0,
            }
        }
    }

    impl CelestialBody for ProbeBody {
        fn position(&self) -> Vec3 {
            self.position
        }

        fn radius(&self) -> f32 {
            self.radius
        }

        fn update(&mut self, dt: f32) {
            self.update_calls += 1;
            self.last_dt = dt;
        }

        fn orbit_around(
            &mut self,
            center: Vec3,
            distance: f32,
            angular_speed: f32,
            sim_time: f32,
        ) {
            let angle = sim_time * angular_speed;
            self.position = Vec3::new(
                center.x + angle.sin() * distance,
                center.y,
                center.z + angle.cos() * distance,
            );
        }
    }

    fn scheduler_with(
        id: &str,
        radius: f32,
        orbit: Option<OrbitalParams>,
    ) -> (AnimationScheduler, BodyHandle) {
        let mut scheduler = AnimationScheduler::new(Vec3::ZERO);
        let handle = body_handle(ProbeBody::new(radius));
        scheduler.register_body(id, handle.clone(), orbit);
        scheduler.start();
        (scheduler, handle)
    }

    fn position_of(handle: &BodyHandle) -> Vec3 {
        handle.borrow().position()
    }

    #[test]
    fn orbiting_body_stays_on_its_circle() {
        let (mut scheduler, handle) = scheduler_with(
            "earth",
            6.0,
            Some(OrbitalParams {
                distance: 62.0,
                angular_speed: 0.6,
            }),
        );
        scheduler.tick(0.0);
        for now in [0.3, 1.1, 4.7, 13.9] {
            scheduler.tick(now);
            let pos = position_of(&handle);
            let r2 = pos.x * pos.x + pos.z * pos.z;
            assert!(
                (r2 - 62.0 * 62.0).abs() < 1e-2,
                "off circle at t={now}: r^2 = {r2}"
            );
            assert_eq!(pos.y, 0.0);
        }
    }

    #[test]
    fn quarter_orbit_lands_on_positive_x_axis() {
        let (mut scheduler, handle) = scheduler_with(
            "earth",
            6.0,
            Some(OrbitalParams {
                distance: 70.0,
                angular_speed: 1.0,
            }),
        );
        scheduler.tick(0.0);
        scheduler.tick(FRAC_PI_2 as f64);
        let pos = position_of(&handle);
        assert!((pos.x - 70.0).abs() < 1e-4, "x = {}", pos.x);
        assert!(pos.y.abs() < 1e-4);
        assert!(pos.z.abs() < 1e-4, "z = {}", pos.z);
    }

    #[test]
    fn body_without_orbit_only_gets_updates() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut scheduler = AnimationScheduler::new(Vec3::ZERO);
        let sun = Rc::new(RefCell::new(ProbeBody::new(16.0)));
        let handle: BodyHandle = sun.clone();
        scheduler.register_body("sun", handle, None);
        scheduler.start();
        scheduler.tick(0.0);
        scheduler.tick(1.0);
        assert_eq!(sun.borrow().position, Vec3::ZERO);
        assert_eq!(sun.borrow().update_calls, 2);
    }

    #[test]
    fn paused_ticks_leave_positions_unchanged() {
        let (mut scheduler, handle) = scheduler_with(
            "earth",
            6.0,
            Some(OrbitalParams {
                distance: 62.0,
                angular_speed: 0.6,
            }),
        );
        scheduler.tick(0.0);
        scheduler.tick(1.0);
        let before = position_of(&handle);
        scheduler.set_paused(true, 1.0);
        scheduler.tick(5.0);
        scheduler.tick(9.0);
        assert_eq!(position_of(&handle), before);
    }

    #[test]
    fn resume_without_elapsed_wall_time_does_not_move_bodies() {
        let (mut scheduler, handle) = scheduler_with(
            "earth",
            6.0,
            Some(OrbitalParams {
                distance: 62.0,
                angular_speed: 0.6,
            }),
        );
        scheduler.tick(0.0);
        scheduler.tick(1.0);
        let before = position_of(&handle);
        scheduler.set_paused(true, 1.0);
        scheduler.tick(42.0);
        scheduler.set_paused(false, 42.0);
        scheduler.tick(42.0);
        let after = position_of(&handle);
        assert!((after - before).length() < 1e-5, "body jumped on resume");
    }

    #[test]
    fn update_orbit_round_trips_and_ignores_unknown_ids() {
        let (mut scheduler, _handle) = scheduler_with(
            "mars",
            4.0,
            Some(OrbitalParams {
                distance: 1.0,
                angular_speed: 1.0,
            }),
        );
        scheduler.update_orbit("mars", 78.0, 0.48);
        let params = scheduler.get_orbit("mars").unwrap();
        assert_eq!(params.distance, 78.0);
        assert_eq!(params.angular_speed, 0.48);

        scheduler.update_orbit("phantom", 1.0, 1.0);
        assert_eq!(scheduler.get_orbit("phantom"), None);
    }

    #[test]
    fn deregister_removes_body_and_orbit() {
        let (mut scheduler, _handle) = scheduler_with(
            "mars",
            4.0,
            Some(OrbitalParams {
                distance: 78.0,
                angular_speed: 0.48,
            }),
        );
        scheduler.deregister_body("mars");
        assert_eq!(scheduler.body_count(), 0);
        assert_eq!(scheduler.get_orbit("mars"), None);
        // Deregistering again must stay silent.
        scheduler.deregister_body("mars");
    }

    #[test]
    fn reregistering_replaces_the_old_entry() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let (mut scheduler, _old) = scheduler_with("earth", 6.0, None);
        let replacement = Rc::new(RefCell::new(ProbeBody::new(9.0)));
        let handle: BodyHandle = replacement.clone();
        scheduler.register_body(
            "earth",
            handle,
            Some(OrbitalParams {
                distance: 62.0,
                angular_speed: 0.6,
            }),
        );
        assert_eq!(scheduler.body_count(), 1);
        scheduler.tick(0.0);
        assert_eq!(replacement.borrow().update_calls, 1);
    }

    #[test]
    fn frame_observers_run_in_registration_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut scheduler = AnimationScheduler::new(Vec3::ZERO);
        let order: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
        for tag in [1u32, 2, 3] {
            let order = order.clone();
            scheduler.add_frame_observer(move |_snapshot| order.borrow_mut().push(tag));
        }
        scheduler.notify_frame_end();
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn frame_snapshot_reflects_clock_state() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut scheduler = AnimationScheduler::new(Vec3::ZERO);
        scheduler.start();
        scheduler.set_time_scale(2.0);
        scheduler.tick(0.0);
        scheduler.tick(3.0);

        let seen: Rc<RefCell<Option<FrameSnapshot>>> = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        scheduler.add_frame_observer(move |snapshot| *sink.borrow_mut() = Some(*snapshot));
        scheduler.notify_frame_end();

        let snapshot = seen.borrow().unwrap();
        assert!((snapshot.elapsed - 3.0).abs() < 1e-12);
        assert!((snapshot.sim_time - 6.0).abs() < 1e-9);
        assert!(!snapshot.paused);
    }
}
