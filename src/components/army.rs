use bevy::prelude::*;

/// Combat profile shared by every soldier of one troop type.
#[derive(Clone, Component, Copy, Debug)]
pub struct Troop {
    pub armor: i32,
    pub weapon_damage: i32,
}

/// A homogeneous block of soldiers inside an army, e.g. 100 infantry.
#[derive(Clone, Copy, Debug, Default)]
pub struct TroopStack {
    pub size: usize,
    /// Troop type this stack is made of; `None` for generic levies.
    pub troop: Option<Entity>,
}

/// Groups troops under one banner and marks the entity as a simulation
/// agent: anything with `Army` + `Position` is scanned by perception and
/// considered a rival by other agents.
#[derive(Clone, Component, Debug, Default)]
pub struct Army {
    pub stacks: Vec<TroopStack>,
    pub money: f32,
}

impl Army {
    pub fn with_stack(size: usize) -> Self {
        Army {
            stacks: vec![TroopStack { size, troop: None }],
            money: 0.0,
        }
    }

    pub fn troop_count(&self) -> usize {
        self.stacks.iter().map(|stack| stack.size).sum()
    }
}
