//! A tank bound to its body and status display.
use super::{
    DamageOutcome, DiscreteAction, FireResult, MovementExecutor, Pose, ProjectileSpawner,
    StatusDisplay, TankCombatController, TankConfig, TankId, Zone,
};
use crate::error::TankError;
use log::debug;

/// Dispatches actions and world events to a [`TankCombatController`] and
/// keeps the collaborators of the tank in sync with it.
///
/// The projectile spawner is passed to [`act`](Self::act) rather than owned,
/// because several tanks usually share one projectile world.
pub struct TankAgent<M, D> {
    id: TankId,
    controller: TankCombatController,
    body: M,
    display: D,
}

impl<M, D> TankAgent<M, D>
where
    M: MovementExecutor,
    D: StatusDisplay,
{
    /// Builds an agent whose controller is inactive until
    /// [`begin_episode`](Self::begin_episode).
    pub fn new(id: TankId, config: &TankConfig, body: M, display: D) -> Result<Self, TankError> {
        Ok(Self {
            id,
            controller: TankCombatController::new(config)?,
            body,
            display,
        })
    }

    /// Starts an episode and refreshes both bars. Returns the episode number.
    pub fn begin_episode(&mut self) -> u64 {
        let episode = self.controller.reset_episode();
        self.display.set_health_fill(1.0);
        self.display.set_reload_fill(1.0);
        episode
    }

    /// Per-frame update.
    pub fn update(&mut self, dt: f32) -> Result<(), TankError> {
        self.controller.tick(dt)?;
        self.display.set_reload_fill(self.controller.reload_ratio());
        Ok(())
    }

    /// Applies one decision: move, turn, then fire.
    ///
    /// Returns `None` if the action does not fire. A fired shot issues exactly
    /// one spawn request to `spawner`. Nothing moves while no episode runs.
    pub fn act<S>(
        &mut self,
        action: &DiscreteAction,
        dt: f32,
        spawner: &mut S,
    ) -> Result<Option<FireResult>, TankError>
    where
        S: ProjectileSpawner,
    {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(TankError::InvalidDeltaTime(dt));
        }
        if !self.controller.is_active() {
            return Ok(if action.fire {
                Some(FireResult::Blocked)
            } else {
                None
            });
        }

        self.body.apply_move(action.movement, dt);
        self.body.apply_turn(action.turn, dt);

        if !action.fire {
            return Ok(None);
        }
        let result = self.controller.request_fire();
        if result == FireResult::Fired {
            let handle = spawner.spawn(self.body.muzzle(), self.id);
            debug!("Tank {:?} launched projectile {:?}", self.id, handle);
            self.display.set_reload_fill(self.controller.reload_ratio());
        }
        Ok(Some(result))
    }

    /// Applies damage and refreshes the health bar.
    pub fn take_damage(&mut self, amount: i32) -> Result<DamageOutcome, TankError> {
        let outcome = self.controller.take_damage(amount)?;
        self.display.set_health_fill(self.controller.health_ratio());
        Ok(outcome)
    }

    /// A projectile of this tank hit the enemy.
    pub fn on_hit(&mut self, target_destroyed: bool) {
        self.controller.on_hit(target_destroyed);
    }

    /// A projectile of this tank expired.
    pub fn on_miss(&mut self) {
        self.controller.on_miss();
    }

    /// The body of the tank entered a trigger zone.
    pub fn on_zone_entered(&mut self, zone: Zone) {
        match zone {
            Zone::OutOfBounds => self.controller.on_boundary_exit(),
            Zone::Arena => {}
        }
    }

    /// Self-observation of the tank: its reload ratio.
    pub fn observe(&self) -> f32 {
        self.controller.reload_ratio()
    }

    /// Reward accrued since the previous call.
    pub fn take_reward(&mut self) -> f32 {
        self.controller.take_reward()
    }

    /// Identifier of the tank.
    pub fn id(&self) -> TankId {
        self.id
    }

    /// Current pose of the body.
    pub fn pose(&self) -> Pose {
        self.body.pose()
    }

    /// Read access to the combat state.
    pub fn controller(&self) -> &TankCombatController {
        &self.controller
    }

    /// Read access to the body.
    pub fn body(&self) -> &M {
        &self.body
    }

    /// Write access to the body, for placing it at the start of an episode.
    pub fn body_mut(&mut self) -> &mut M {
        &mut self.body
    }

    /// Read access to the status display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Write access to the status display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{MoveCommand, ProjectileHandle, TurnCommand};

    #[derive(Default)]
    struct Body {
        moves: Vec<MoveCommand>,
        turns: Vec<TurnCommand>,
    }

    impl MovementExecutor for Body {
        fn apply_move(&mut self, command: MoveCommand, _dt: f32) {
            self.moves.push(command);
        }

        fn apply_turn(&mut self, command: TurnCommand, _dt: f32) {
            self.turns.push(command);
        }

        fn pose(&self) -> Pose {
            Pose::new(1.0, 2.0, 45.0)
        }
    }

    #[derive(Default)]
    struct Bars {
        reload: Option<f32>,
        health: Option<f32>,
    }

    impl StatusDisplay for Bars {
        fn set_reload_fill(&mut self, ratio: f32) {
            self.reload = Some(ratio);
        }

        fn set_health_fill(&mut self, ratio: f32) {
            self.health = Some(ratio);
        }
    }

    #[derive(Default)]
    struct Spawns(Vec<(Pose, TankId)>);

    impl ProjectileSpawner for Spawns {
        fn spawn(&mut self, origin: Pose, owner: TankId) -> ProjectileHandle {
            self.0.push((origin, owner));
            ProjectileHandle(self.0.len() as u64)
        }
    }

    fn agent() -> TankAgent<Body, Bars> {
        TankAgent::new(
            TankId(7),
            &TankConfig::default(),
            Body::default(),
            Bars::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_begin_episode_fills_bars() {
        let mut agent = agent();
        assert_eq!(agent.begin_episode(), 1);
        assert_eq!(agent.display().reload, Some(1.0));
        assert_eq!(agent.display().health, Some(1.0));
        assert_eq!(agent.observe(), 1.0);
    }

    #[test]
    fn test_one_spawn_per_shot() {
        let mut agent = agent();
        let mut spawns = Spawns::default();
        agent.begin_episode();

        let fire = DiscreteAction::new(MoveCommand::Forward, TurnCommand::Right, true);
        assert_eq!(
            agent.act(&fire, 0.25, &mut spawns),
            Ok(Some(FireResult::Fired))
        );
        assert_eq!(
            agent.act(&fire, 0.25, &mut spawns),
            Ok(Some(FireResult::Blocked))
        );
        assert_eq!(spawns.0.len(), 1);
        assert_eq!(spawns.0[0], (Pose::new(1.0, 2.0, 45.0), TankId(7)));
        assert_eq!(agent.display().reload, Some(0.0));
        assert_eq!(agent.body().moves.len(), 2);

        agent.update(1.0).unwrap();
        assert_eq!(agent.display().reload, Some(1.0));
        assert_eq!(
            agent.act(&fire, 0.25, &mut spawns),
            Ok(Some(FireResult::Fired))
        );
        assert_eq!(spawns.0.len(), 2);
    }

    #[test]
    fn test_no_fire_returns_none() {
        let mut agent = agent();
        let mut spawns = Spawns::default();
        agent.begin_episode();
        assert_eq!(
            agent.act(&DiscreteAction::idle(), 0.1, &mut spawns),
            Ok(None)
        );
        assert!(spawns.0.is_empty());
        assert_eq!(agent.body().moves, vec![MoveCommand::Stop]);
    }

    #[test]
    fn test_inactive_agent_does_not_move() {
        let mut agent = agent();
        let mut spawns = Spawns::default();
        let fire = DiscreteAction::new(MoveCommand::Forward, TurnCommand::None, true);
        assert_eq!(
            agent.act(&fire, 0.1, &mut spawns),
            Ok(Some(FireResult::Blocked))
        );
        assert!(agent.body().moves.is_empty());
        assert!(spawns.0.is_empty());
    }

    #[test]
    fn test_damage_updates_health_bar() {
        let mut agent = agent();
        agent.begin_episode();
        assert_eq!(agent.take_damage(25), Ok(DamageOutcome::Damaged));
        assert_eq!(agent.display().health, Some(0.75));
        assert_eq!(agent.take_damage(100), Ok(DamageOutcome::Destroyed));
        assert_eq!(agent.display().health, Some(0.0));
        assert!(!agent.controller().is_active());
    }

    #[test]
    fn test_zones() {
        let mut agent = agent();
        agent.begin_episode();
        agent.on_zone_entered(Zone::Arena);
        assert!(agent.controller().is_active());
        agent.on_zone_entered(Zone::OutOfBounds);
        assert!(!agent.controller().is_active());
        assert_eq!(agent.take_reward(), -1.0);
    }
}
