//! Frame assembly: 2D map on the left, pseudo-3D view on the right

use super::commands::{Color, DrawCommand, colors, weights};
use super::projection::{Slice, Viewport, project};
use crate::Settings;
use crate::Vector2;
use crate::sim::{Fan, GameState, Layer, Scene, Segment, beam_hits};

/// Score counter anchor and text size
const SCORE_POSITION: Vector2 = Vector2::new(600.0, 40.0);
const SCORE_SIZE: f64 = 32.0;

fn segment_line(segment: &Segment, color: Color, weight: f64) -> DrawCommand {
    DrawCommand::line(segment.begin(), segment.end(), color, weight)
}

fn slice_line(slice: &Slice) -> DrawCommand {
    let (color, weight) = match slice.layer {
        Layer::Wall | Layer::Grid => (colors::WALL, weights::WALL_SLICE),
        Layer::Cheese => (colors::CHEESE, weights::CHEESE_SLICE),
    };
    DrawCommand::line(slice.begin, slice.end, color.with_alpha(slice.shade), weight)
}

/// Build the draw list for one frame
///
/// Commands are in painter's order: background, map, view frame, then per
/// beam its map line, hit markers and slices.
pub fn render(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    render_with_viewport(state, settings, &Viewport::default())
}

pub fn render_with_viewport(state: &GameState, settings: &Settings, viewport: &Viewport) -> Vec<DrawCommand> {
    let scene = Scene::build(&state.bait);
    let fan = Fan::from_player(&state.player, settings);

    let mut commands = Vec::with_capacity(64 + fan.beam_total as usize * 4);
    commands.push(DrawCommand::Clear {
        color: colors::BACKGROUND,
    });

    // Map
    for segment in scene.walls.iter().chain(scene.grid.iter()) {
        commands.push(segment_line(segment, colors::WALL, weights::MAP_LINE));
    }
    commands.push(DrawCommand::point(state.bait.position, colors::BAIT, weights::BAIT));
    for segment in &scene.cheese {
        commands.push(segment_line(segment, colors::CHEESE, weights::MAP_LINE));
    }
    commands.push(DrawCommand::point(
        state.player.position,
        colors::PLAYER,
        weights::PLAYER,
    ));

    // View
    commands.push(DrawCommand::Rect {
        origin: viewport.frame_origin,
        size: viewport.frame_size,
        color: colors::FRAME,
        weight: weights::FRAME,
    });

    for beam in fan.beams() {
        if settings.show_beams {
            commands.push(segment_line(&beam.segment, colors::BEAM, weights::BEAM));
        }
        for hit in beam_hits(&scene, beam) {
            if settings.show_hit_points {
                commands.push(DrawCommand::point(hit.point, colors::HIT_POINT, weights::HIT_POINT));
            }
            commands.push(slice_line(&project(&hit, &fan, viewport)));
        }
    }

    if settings.show_score {
        commands.push(DrawCommand::Text {
            text: state.score.to_string(),
            at: SCORE_POSITION,
            size: SCORE_SIZE,
            color: colors::SCORE,
            weight: weights::TEXT,
        });
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Bait, Player, cast};

    fn sample_state() -> GameState {
        GameState {
            player: Player::default(),
            bait: Bait {
                position: Vector2::new(100.0, 160.0),
                angle: 0.0,
            },
            score: 3,
            frame: 0,
        }
    }

    fn count(commands: &[DrawCommand], pred: impl Fn(&DrawCommand) -> bool) -> usize {
        commands.iter().filter(|c| pred(c)).count()
    }

    #[test]
    fn test_frame_layout() {
        let state = sample_state();
        let settings = Settings::default();
        let commands = render(&state, &settings);

        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                color: colors::BACKGROUND
            }
        );
        // 4 walls + 7 grid lines + 3 cheese lines on the map
        let map_lines = count(&commands, |c| {
            matches!(c, DrawCommand::Line { weight, .. } if *weight == weights::MAP_LINE)
        });
        assert_eq!(map_lines, 14);

        let beams = count(&commands, |c| {
            matches!(c, DrawCommand::Line { color, weight, .. }
                if *color == colors::BEAM && *weight == weights::BEAM)
        });
        assert_eq!(beams, 80);

        let rects = count(&commands, |c| matches!(c, DrawCommand::Rect { .. }));
        assert_eq!(rects, 1);

        match commands.last() {
            Some(DrawCommand::Text { text, .. }) => assert_eq!(text, "3"),
            other => panic!("expected score text, got {other:?}"),
        }
    }

    #[test]
    fn test_one_slice_and_marker_per_hit() {
        let state = sample_state();
        let settings = Settings::default();
        let commands = render(&state, &settings);

        let scene = Scene::build(&state.bait);
        let fan = Fan::from_player(&state.player, &settings);
        let hits = cast(&scene, fan).count();
        assert!(hits > 0);

        let markers = count(&commands, |c| {
            matches!(c, DrawCommand::Point { weight, .. } if *weight == weights::HIT_POINT)
        });
        assert_eq!(markers, hits);

        let slices = count(&commands, |c| {
            matches!(c, DrawCommand::Line { weight, .. }
                if *weight == weights::WALL_SLICE || *weight == weights::CHEESE_SLICE)
        });
        assert_eq!(slices, hits);
    }

    #[test]
    fn test_cheese_slices_are_yellow() {
        let state = sample_state();
        let commands = render(&state, &Settings::default());
        let cheese_slices: Vec<&DrawCommand> = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { weight, .. } if *weight == weights::CHEESE_SLICE))
            .collect();
        assert!(!cheese_slices.is_empty());
        for slice in cheese_slices {
            if let DrawCommand::Line { color, .. } = slice {
                assert_eq!((color.r, color.g, color.b), (255, 255, 0));
            }
        }
    }

    #[test]
    fn test_overlays_can_be_disabled() {
        let state = sample_state();
        let settings = Settings {
            show_beams: false,
            show_hit_points: false,
            show_score: false,
            ..Default::default()
        };
        let commands = render(&state, &settings);
        assert_eq!(
            count(&commands, |c| matches!(c, DrawCommand::Line { color, weight, .. }
                if *color == colors::BEAM && *weight == weights::BEAM)),
            0
        );
        assert_eq!(count(&commands, |c| matches!(c, DrawCommand::Text { .. })), 0);
        assert_eq!(
            count(&commands, |c| {
                matches!(c, DrawCommand::Point { weight, .. } if *weight == weights::HIT_POINT)
            }),
            0
        );
    }

    #[test]
    fn test_slices_stay_inside_view() {
        let state = sample_state();
        let viewport = Viewport::default();
        let commands = render_with_viewport(&state, &Settings::default(), &viewport);
        for cmd in &commands {
            if let DrawCommand::Line { from, to, weight, .. } = cmd {
                if *weight == weights::WALL_SLICE || *weight == weights::CHEESE_SLICE {
                    assert!(from.x >= 320.0 && from.x < 620.0);
                    assert!(from.y >= 55.0 && to.y <= 305.0);
                }
            }
        }
    }
}
