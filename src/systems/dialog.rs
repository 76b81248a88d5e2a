use bevy::prelude::*;

use crate::{
    components::{
        army::Army,
        dialog::{Dialog, DialogAction, DialogOption},
        town::{Item, Market, Town},
        LocalPlayer,
    },
    events::{Collision, DialogChoice},
    resources::GameState,
};

fn exit_option() -> DialogOption {
    DialogOption {
        reply: "Exit".to_owned(),
        action: DialogAction::Dismiss,
    }
}

fn army_dialog() -> Dialog {
    Dialog {
        lines: vec!["I'm here to block your way! Surrender now!".to_owned()],
        current_line: 0,
        options: vec![
            DialogOption {
                reply: "Out of my way!".to_owned(),
                action: DialogAction::Taunt,
            },
            exit_option(),
        ],
    }
}

fn market_dialog(market: &Market, q_items: &Query<&Item>) -> Dialog {
    let mut options = Vec::new();
    for &item_ent in &market.items {
        let Ok(item) = q_items.get(item_ent) else {
            error!("invalid item id {}", item_ent);
            continue;
        };
        options.push(DialogOption {
            reply: format!("I want to buy {} with price {}.", item.name, item.price),
            action: DialogAction::Buy { item: item_ent },
        });
    }
    options.push(exit_option());
    Dialog {
        lines: vec!["What do you want?".to_owned()],
        current_line: 0,
        options,
    }
}

/// Consumes the tick's collision events, opening a confrontation
/// dialog for armies and a trade dialog for towns. An event whose
/// counterpart no longer resolves in the store is logged and dropped.
pub fn open_dialogs(
    mut commands: Commands,
    mut reader: EventReader<Collision>,
    mut state: ResMut<GameState>,
    q_armies: Query<&Army>,
    q_towns: Query<&Market, With<Town>>,
    q_items: Query<&Item>,
) {
    for &Collision { player, other } in reader.read() {
        debug!("dispatching collision of {} with {}", player, other);
        if q_armies.get(other).is_ok() {
            *state = GameState::InDialog;
            commands.spawn(army_dialog());
        } else if let Ok(market) = q_towns.get(other) {
            *state = GameState::InDialog;
            commands.spawn(market_dialog(market, &q_items));
        } else {
            error!(
                "collision event for {}: {} is neither army nor town, ignoring",
                player, other
            );
        }
    }
}

/// Applies a picked dialog option: taunts just log, everything else
/// closes the dialog and returns the game to the map.
pub fn resolve_choices(
    mut commands: Commands,
    mut reader: EventReader<DialogChoice>,
    mut state: ResMut<GameState>,
    q_dialogs: Query<&Dialog>,
    q_items: Query<&Item>,
    mut q_player: Query<&mut Army, With<LocalPlayer>>,
) {
    for &DialogChoice { dialog, option } in reader.read() {
        let Ok(data) = q_dialogs.get(dialog) else {
            error!("dialog choice for missing dialog {}", dialog);
            continue;
        };
        let Some(picked) = data.options.get(option) else {
            error!("dialog {} has no option {}", dialog, option);
            continue;
        };

        match picked.action {
            DialogAction::Taunt => {
                info!("{}", picked.reply);
            }
            DialogAction::Dismiss => {
                *state = GameState::Normal;
                commands.entity(dialog).despawn();
            }
            DialogAction::Buy { item } => {
                let Ok(item) = q_items.get(item) else {
                    error!("dialog {} buy option references a missing item", dialog);
                    continue;
                };
                if let Ok(mut army) = q_player.single_mut() {
                    if army.money >= item.price {
                        army.money -= item.price;
                        info!("You bought {}", item.name);
                    } else {
                        warn!("cannot afford {} at {}", item.name, item.price);
                    }
                }
                *state = GameState::Normal;
                commands.entity(dialog).despawn();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<GameState>();
        app.add_event::<Collision>();
        app.add_event::<DialogChoice>();
        app.add_systems(Update, (open_dialogs, resolve_choices).chain());
        app
    }

    fn single_dialog(app: &mut App) -> (Entity, Dialog) {
        let mut query = app.world_mut().query::<(Entity, &Dialog)>();
        let (ent, dialog) = query.single(app.world()).unwrap();
        (ent, dialog.clone())
    }

    fn spawn_player(app: &mut App, money: f32) -> Entity {
        let mut army = Army::with_stack(1);
        army.money = money;
        app.world_mut().spawn((LocalPlayer, army)).id()
    }

    #[test]
    fn test_army_collision_opens_confrontation() {
        let mut app = test_app();
        let player = spawn_player(&mut app, 0.0);
        let rival = app.world_mut().spawn(Army::with_stack(3)).id();
        app.world_mut().send_event(Collision { player, other: rival });
        app.update();

        assert_eq!(*app.world().resource::<GameState>(), GameState::InDialog);
        let (_, dialog) = single_dialog(&mut app);
        assert_eq!(dialog.line(), Some("I'm here to block your way! Surrender now!"));
        assert_eq!(dialog.options.len(), 2);
        assert_eq!(dialog.options[1].action, DialogAction::Dismiss);
    }

    #[test]
    fn test_town_collision_opens_market() {
        let mut app = test_app();
        let player = spawn_player(&mut app, 0.0);
        let bread = app
            .world_mut()
            .spawn(Item { name: "bread".to_owned(), price: 5.0 })
            .id();
        let town = app
            .world_mut()
            .spawn((Town, Market { items: vec![bread] }))
            .id();
        app.world_mut().send_event(Collision { player, other: town });
        app.update();

        assert_eq!(*app.world().resource::<GameState>(), GameState::InDialog);
        let (_, dialog) = single_dialog(&mut app);
        assert_eq!(dialog.options.len(), 2);
        assert_eq!(dialog.options[0].action, DialogAction::Buy { item: bread });
    }

    #[test]
    fn test_despawned_counterpart_is_ignored() {
        let mut app = test_app();
        let player = spawn_player(&mut app, 0.0);
        let ghost = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(Collision { player, other: ghost });
        app.update();

        assert_eq!(*app.world().resource::<GameState>(), GameState::Normal);
        let mut query = app.world_mut().query::<&Dialog>();
        assert_eq!(query.iter(app.world()).count(), 0);
    }

    #[test]
    fn test_dismiss_closes_dialog() {
        let mut app = test_app();
        let player = spawn_player(&mut app, 0.0);
        let rival = app.world_mut().spawn(Army::with_stack(3)).id();
        app.world_mut().send_event(Collision { player, other: rival });
        app.update();
        let (dialog_ent, dialog) = single_dialog(&mut app);
        let exit = dialog.options.len() - 1;

        app.world_mut()
            .send_event(DialogChoice { dialog: dialog_ent, option: exit });
        app.update();

        assert_eq!(*app.world().resource::<GameState>(), GameState::Normal);
        assert!(app.world().get_entity(dialog_ent).is_err());
    }

    #[test]
    fn test_taunt_keeps_dialog_open() {
        let mut app = test_app();
        let player = spawn_player(&mut app, 0.0);
        let rival = app.world_mut().spawn(Army::with_stack(3)).id();
        app.world_mut().send_event(Collision { player, other: rival });
        app.update();
        let (dialog_ent, _) = single_dialog(&mut app);

        app.world_mut()
            .send_event(DialogChoice { dialog: dialog_ent, option: 0 });
        app.update();

        assert_eq!(*app.world().resource::<GameState>(), GameState::InDialog);
        assert!(app.world().get_entity(dialog_ent).is_ok());
    }

    #[test]
    fn test_buy_deducts_money_and_closes() {
        let mut app = test_app();
        let player = spawn_player(&mut app, 50.0);
        let bread = app
            .world_mut()
            .spawn(Item { name: "bread".to_owned(), price: 5.0 })
            .id();
        let town = app
            .world_mut()
            .spawn((Town, Market { items: vec![bread] }))
            .id();
        app.world_mut().send_event(Collision { player, other: town });
        app.update();
        let (dialog_ent, _) = single_dialog(&mut app);

        app.world_mut()
            .send_event(DialogChoice { dialog: dialog_ent, option: 0 });
        app.update();

        assert_eq!(app.world().get::<Army>(player).unwrap().money, 45.0);
        assert_eq!(*app.world().resource::<GameState>(), GameState::Normal);
        assert!(app.world().get_entity(dialog_ent).is_err());
    }

    #[test]
    fn test_buy_without_funds_still_closes() {
        let mut app = test_app();
        let player = spawn_player(&mut app, 1.0);
        let horse = app
            .world_mut()
            .spawn(Item { name: "sumpter horse".to_owned(), price: 40.0 })
            .id();
        let town = app
            .world_mut()
            .spawn((Town, Market { items: vec![horse] }))
            .id();
        app.world_mut().send_event(Collision { player, other: town });
        app.update();
        let (dialog_ent, _) = single_dialog(&mut app);

        app.world_mut()
            .send_event(DialogChoice { dialog: dialog_ent, option: 0 });
        app.update();

        assert_eq!(app.world().get::<Army>(player).unwrap().money, 1.0);
        assert_eq!(*app.world().resource::<GameState>(), GameState::Normal);
    }
}
