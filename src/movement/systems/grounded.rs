//! Movement domain: grounded detection and ground-tied budget resets.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    DashState, GameLayer, GroundAnchor, MovementState, MovementTuning, Player,
    reset_budgets_on_ground,
};

/// Once per frame tick: sphere-overlap the ground layer at the ground
/// anchor, record the grounded edge, and run the budget resets tied to it.
/// Filtering to the Ground layer keeps sensors/triggers out of the result.
pub(crate) fn update_grounded(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    anchors: Query<(&ChildOf, &GlobalTransform), With<GroundAnchor>>,
    mut players: Query<(&mut MovementState, &mut DashState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = Collider::sphere(tuning.ground_check_radius);

    for (child_of, anchor) in &anchors {
        let Ok((mut state, mut dash)) = players.get_mut(child_of.parent()) else {
            continue;
        };

        let hits = spatial_query.shape_intersections(
            &probe,
            anchor.translation(),
            Quat::IDENTITY,
            &ground_filter,
        );

        state.was_grounded = state.grounded;
        state.grounded = !hits.is_empty();

        if state.landed() {
            debug!("Landed: jumps and air dash restored");
        }

        reset_budgets_on_ground(&mut state, &mut dash);
    }
}
