//! Turns a verdict into at most one off-hand swap.

use crate::config::ThreatConfig;
use crate::state::{ActorSnapshot, InventorySlot, InventorySnapshot, Millis};

/// A single inventory click the host can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickAction {
    /// Exchange the contents of two slots.
    Swap { from: InventorySlot, to: InventorySlot },
}

impl ClickAction {
    pub const fn swap_into_offhand(from: InventorySlot) -> Self {
        ClickAction::Swap {
            from,
            to: InventorySlot::OffHand,
        }
    }
}

/// Conditions the scheduler must respect before executing a queued action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryConstraints {
    /// Minimum delay before the click may run.
    pub click_delay_ms: u32,
}

/// Host inventory subsystem.
///
/// Scheduled actions compete with other modules' requests and are executed
/// by the host under its own constraints; [`perform`](Self::perform) bypasses
/// that queue entirely.
pub trait InventoryScheduler {
    fn schedule(&mut self, constraints: InventoryConstraints, action: ClickAction);

    /// Tells the scheduler a click happened outside of it, so it does not
    /// submit a conflicting one in the same tick.
    fn click_occurred(&mut self);

    fn perform(&mut self, action: ClickAction);
}

/// What the executor did during one opportunity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipOutcome {
    /// The verdict was negative.
    NotNeeded,
    AlreadyEquipped,
    /// No totem anywhere in storage.
    NoItem,
    /// The last switch was too recent.
    Throttled { remaining_ms: u64 },
    Scheduled(ClickAction),
    Performed(ClickAction),
}

impl EquipOutcome {
    /// Whether a click was handed to the host.
    pub const fn is_switch(&self) -> bool {
        matches!(self, EquipOutcome::Scheduled(_) | EquipOutcome::Performed(_))
    }
}

/// Enforces the minimum delay between two off-hand switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwitchTimer {
    last_switch: Option<Millis>,
}

impl SwitchTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds still to wait at `now`; zero when a switch is allowed.
    pub fn remaining(&self, now: Millis, delay_ms: u32) -> u64 {
        match self.last_switch {
            Some(last) => (delay_ms as u64).saturating_sub(now.since(last)),
            None => 0,
        }
    }

    pub fn record(&mut self, now: Millis) {
        self.last_switch = Some(now);
    }

    pub fn last_switch(&self) -> Option<Millis> {
        self.last_switch
    }
}

/// Submits the totem swap requested by a positive verdict.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipExecutor {
    timer: SwitchTimer,
}

impl EquipExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timer(&self) -> &SwitchTimer {
        &self.timer
    }

    /// Equips a totem if `verdict` asks for one and none is held yet.
    ///
    /// At most one action is submitted per call.
    pub fn maybe_equip(
        &mut self,
        verdict: bool,
        actor: &ActorSnapshot,
        inventory: &InventorySnapshot,
        config: &ThreatConfig,
        scheduler: &mut dyn InventoryScheduler,
        now: Millis,
    ) -> EquipOutcome {
        if !verdict {
            return EquipOutcome::NotNeeded;
        }
        // The actor's held item is authoritative; the inventory's off-hand copy may lag.
        if actor.offhand.is_totem() {
            return EquipOutcome::AlreadyEquipped;
        }

        let Some(slot) = inventory.find_slot(|stack| stack.is_totem()) else {
            return EquipOutcome::NoItem;
        };

        self.submit(ClickAction::swap_into_offhand(slot), config, scheduler, now)
    }

    /// Submits `action`, honouring the switch delay and the
    /// direct-send mode. Also used by the caller to switch back.
    pub fn submit(
        &mut self,
        action: ClickAction,
        config: &ThreatConfig,
        scheduler: &mut dyn InventoryScheduler,
        now: Millis,
    ) -> EquipOutcome {
        let remaining_ms = self.timer.remaining(now, config.switch_delay_ms);
        if remaining_ms > 0 {
            return EquipOutcome::Throttled { remaining_ms };
        }
        self.timer.record(now);

        if config.send_directly {
            scheduler.click_occurred();
            scheduler.perform(action);
            EquipOutcome::Performed(action)
        } else {
            let constraints = InventoryConstraints {
                click_delay_ms: config.switch_delay_ms,
            };
            scheduler.schedule(constraints, action);
            EquipOutcome::Scheduled(action)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ItemKind, ItemStack, Vec3};

    #[derive(Default)]
    struct Recorder {
        scheduled: Vec<(InventoryConstraints, ClickAction)>,
        performed: Vec<ClickAction>,
        direct_clicks: u32,
    }

    impl InventoryScheduler for Recorder {
        fn schedule(&mut self, constraints: InventoryConstraints, action: ClickAction) {
            self.scheduled.push((constraints, action));
        }

        fn click_occurred(&mut self) {
            self.direct_clicks += 1;
        }

        fn perform(&mut self, action: ClickAction) {
            self.performed.push(action);
        }
    }

    fn totem() -> ItemStack {
        ItemStack::single(ItemKind::TotemOfUndying)
    }

    fn actor() -> ActorSnapshot {
        ActorSnapshot::new(Vec3::ZERO).with_offhand(ItemStack::single(ItemKind::Shield))
    }

    fn inventory_with_totem() -> InventorySnapshot {
        InventorySnapshot::empty()
            .with(InventorySlot::OffHand, ItemStack::single(ItemKind::Shield))
            .with(InventorySlot::Main(4), totem())
    }

    #[test]
    fn negative_verdict_is_a_noop() {
        let mut executor = EquipExecutor::new();
        let mut recorder = Recorder::default();
        let outcome = executor.maybe_equip(
            false,
            &actor(),
            &inventory_with_totem(),
            &ThreatConfig::default(),
            &mut recorder,
            Millis(0),
        );
        assert_eq!(outcome, EquipOutcome::NotNeeded);
        assert!(recorder.scheduled.is_empty());
    }

    #[test]
    fn schedules_single_swap_through_scheduler() {
        let mut executor = EquipExecutor::new();
        let mut recorder = Recorder::default();
        let config = ThreatConfig {
            switch_delay_ms: 150,
            ..ThreatConfig::default()
        };

        let outcome = executor.maybe_equip(
            true,
            &actor(),
            &inventory_with_totem(),
            &config,
            &mut recorder,
            Millis(1_000),
        );

        let action = ClickAction::swap_into_offhand(InventorySlot::Main(4));
        assert_eq!(outcome, EquipOutcome::Scheduled(action));
        assert_eq!(
            recorder.scheduled,
            vec![(InventoryConstraints { click_delay_ms: 150 }, action)]
        );
        assert!(recorder.performed.is_empty());
        assert_eq!(recorder.direct_clicks, 0);
    }

    #[test]
    fn direct_send_performs_and_notifies() {
        let mut executor = EquipExecutor::new();
        let mut recorder = Recorder::default();
        let config = ThreatConfig {
            send_directly: true,
            ..ThreatConfig::default()
        };

        let outcome = executor.maybe_equip(
            true,
            &actor(),
            &inventory_with_totem(),
            &config,
            &mut recorder,
            Millis(0),
        );

        let action = ClickAction::swap_into_offhand(InventorySlot::Main(4));
        assert_eq!(outcome, EquipOutcome::Performed(action));
        assert_eq!(recorder.performed, vec![action]);
        assert_eq!(recorder.direct_clicks, 1);
        assert!(recorder.scheduled.is_empty());
    }

    #[test]
    fn held_totem_is_left_alone() {
        let mut executor = EquipExecutor::new();
        let mut recorder = Recorder::default();
        let actor = actor().with_offhand(totem());
        let outcome = executor.maybe_equip(
            true,
            &actor,
            &inventory_with_totem(),
            &ThreatConfig::default(),
            &mut recorder,
            Millis(0),
        );
        assert_eq!(outcome, EquipOutcome::AlreadyEquipped);
    }

    #[test]
    fn stale_inventory_offhand_does_not_count_as_held() {
        let mut executor = EquipExecutor::new();
        let mut recorder = Recorder::default();
        let inventory = inventory_with_totem().with(InventorySlot::OffHand, totem());
        let outcome = executor.maybe_equip(
            true,
            &actor(),
            &inventory,
            &ThreatConfig::default(),
            &mut recorder,
            Millis(0),
        );
        assert_eq!(
            outcome,
            EquipOutcome::Scheduled(ClickAction::swap_into_offhand(InventorySlot::Main(4)))
        );
    }

    #[test]
    fn missing_totem_is_a_noop() {
        let mut executor = EquipExecutor::new();
        let mut recorder = Recorder::default();
        let outcome = executor.maybe_equip(
            true,
            &actor(),
            &InventorySnapshot::empty(),
            &ThreatConfig::default(),
            &mut recorder,
            Millis(0),
        );
        assert_eq!(outcome, EquipOutcome::NoItem);
        assert!(recorder.scheduled.is_empty());
    }

    #[test]
    fn switch_delay_throttles_consecutive_switches() {
        let mut executor = EquipExecutor::new();
        let mut recorder = Recorder::default();
        let config = ThreatConfig {
            switch_delay_ms: 200,
            ..ThreatConfig::default()
        };
        let inventory = inventory_with_totem();

        let first =
            executor.maybe_equip(true, &actor(), &inventory, &config, &mut recorder, Millis(1_000));
        assert!(first.is_switch());

        let second =
            executor.maybe_equip(true, &actor(), &inventory, &config, &mut recorder, Millis(1_050));
        assert_eq!(second, EquipOutcome::Throttled { remaining_ms: 150 });

        let third =
            executor.maybe_equip(true, &actor(), &inventory, &config, &mut recorder, Millis(1_200));
        assert!(third.is_switch());
        assert_eq!(recorder.scheduled.len(), 2);
    }
}
