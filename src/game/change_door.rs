use crate::game::door::Door;

/// Resolves the contestant's final door after the reveal.
///
/// Staying keeps the initial pick; switching takes the one door that is
/// neither the opened door nor the pick. `opened_door` must differ from
/// `pick`, which the host's reveal guarantees.
pub fn change_door(stay: bool, opened_door: Door, pick: Door) -> Door {
    assert_ne!(
        opened_door, pick,
        "the opened door and the initial pick must differ"
    );

    if stay {
        pick
    } else {
        // Door indices sum to 3, so removing the two known doors leaves the third.
        Door::ALL[3 - opened_door.index() - pick.index()]
    }
}
