//! What each card does once it has been paid for.

use ants_shared::{Card, Field};

use crate::resources::Resources;

/// Stocks that thieves and saboteurs go after.
const STOCKS: [Field; 3] = [Field::Bricks, Field::Weapons, Field::Crystals];

/// Applies `card`'s effect. `own` belongs to the player who played it.
pub fn apply(card: Card, own: &mut Resources, enemy: &mut Resources) {
    match card {
        Card::Wall => own.add(Field::Fence, 3),
        Card::Base => own.add(Field::Castle, 2),
        Card::Defence => own.add(Field::Fence, 6),
        Card::Reserve => {
            own.add(Field::Castle, 8);
            own.subtract(Field::Fence, 4);
        }
        Card::Tower => own.add(Field::Castle, 5),
        Card::School => own.add(Field::Builders, 1),
        Card::Wain => {
            own.add(Field::Castle, 8);
            enemy.subtract(Field::Castle, 4);
        }
        Card::Fence => own.add(Field::Fence, 22),
        Card::Fort => own.add(Field::Castle, 20),
        Card::Babylon => own.add(Field::Castle, 32),

        Card::Archer => enemy.take_damage(2),
        Card::Knight => enemy.take_damage(3),
        Card::Rider => enemy.take_damage(4),
        Card::Platoon => enemy.take_damage(6),
        Card::Recruit => own.add(Field::Soldiers, 1),
        Card::Attack => enemy.take_damage(12),
        Card::Saboteur => {
            for stock in STOCKS {
                enemy.subtract(stock, 4);
            }
        }
        Card::Thief => {
            for stock in STOCKS {
                own.add(stock, enemy.get(stock).min(5));
                enemy.subtract(stock, 5);
            }
        }
        Card::Swat => enemy.subtract(Field::Castle, 10),
        Card::Banshee => enemy.take_damage(32),

        Card::ConjureBricks => own.add(Field::Bricks, 8),
        Card::CrushBricks => enemy.subtract(Field::Bricks, 8),
        Card::ConjureWeapons => own.add(Field::Weapons, 8),
        Card::CrushWeapons => enemy.subtract(Field::Weapons, 8),
        Card::ConjureCrystals => own.add(Field::Crystals, 8),
        Card::CrushCrystals => enemy.subtract(Field::Crystals, 8),
        Card::Sorcerer => own.add(Field::Magi, 1),
        Card::Dragon => enemy.take_damage(25),
        Card::Pixies => own.add(Field::Castle, 22),
        Card::Curse => {
            for field in Field::ALL {
                own.add(field, 1);
                enemy.subtract(field, 1);
                if field.is_production() {
                    enemy.floor(field, 1);
                }
            }
        }
    }
}
