//! The random starfield behind the solar system.
//! Stars carry no identity, every resize throws them all away and rolls new ones.

use bevy::{
    app::{App, Plugin, Startup, Update},
    ecs::{
        change_detection::DetectChanges,
        component::Component,
        entity::Entity,
        event::EventReader,
        query::With,
        schedule::IntoSystemConfigs,
        system::{Commands, Query, Res, ResMut, Resource},
    },
    log::{debug, info},
    math::Vec2,
    render::color::Color,
    sprite::{Anchor, Sprite, SpriteBundle},
    transform::components::Transform,
    window::{PrimaryWindow, Window, WindowResized},
};
use rand::Rng;

use crate::{
    entities::utils::latest_window_size,
    physics::util::vectors::{ScreenCoord, ScreenSize},
};

/// Default number of stars
pub const DEFAULT_STAR_COUNT: usize = 200;
/// Star sizes are drawn from `MIN_STAR_SIZE..MAX_STAR_SIZE`
pub const MIN_STAR_SIZE: u32 = 1;
pub const MAX_STAR_SIZE: u32 = 4;
/// Behind everything else
pub const STAR_Z: f32 = 0.0;

/// A single point light, `size` pixels wide, whose top left corner is `position`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: ScreenCoord,
    pub size: f32,
}

/// The current set of stars
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
    count: usize,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::new(DEFAULT_STAR_COUNT)
    }
}

impl Starfield {
    /// An empty starfield that will hold `count` stars once generated
    pub fn new(count: usize) -> Self {
        Self {
            stars: Vec::with_capacity(count),
            count,
        }
    }

    /// Replaces every star with `count` new ones inside `[0, width) x [0, height)`.
    /// An axis shorter than one pixel puts every star at 0 on that axis.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, size: ScreenSize, rng: &mut R) {
        self.stars.clear();
        let width = size.width.max(0.0) as u32;
        let height = size.height.max(0.0) as u32;
        for _ in 0..self.count {
            let star_size = rng.gen_range(MIN_STAR_SIZE..MAX_STAR_SIZE);
            let x = if width > 0 { rng.gen_range(0..width) } else { 0 };
            let y = if height > 0 { rng.gen_range(0..height) } else { 0 };
            self.stars.push(Star {
                position: ScreenCoord::new(x as f32, y as f32),
                size: star_size as f32,
            });
        }
    }

    pub fn get_stars(&self) -> &[Star] {
        &self.stars
    }
}

/// Marks the sprite drawn for a star
#[derive(Component, Debug, Clone, Copy)]
pub struct StarSprite;

/// Generates the starfield on startup and on every resize, and keeps the star sprites in sync
pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Starfield>();
        app.add_systems(Startup, Self::setup);
        app.add_systems(Update, (Self::regenerate_on_resize_system, Self::sync_sprites_system).chain());
    }
}

/// Bevy Systems
impl StarfieldPlugin {
    pub fn setup(mut starfield: ResMut<Starfield>, windows: Query<&Window, With<PrimaryWindow>>) {
        let Ok(window) = windows.get_single() else {
            return;
        };
        starfield.regenerate(ScreenSize::from(window), &mut rand::thread_rng());
        info!("Spawned {} stars", starfield.get_stars().len());
    }

    pub fn regenerate_on_resize_system(
        mut resize_events: EventReader<WindowResized>,
        mut starfield: ResMut<Starfield>,
    ) {
        let Some(size) = latest_window_size(&mut resize_events) else {
            return;
        };
        starfield.regenerate(size, &mut rand::thread_rng());
        debug!(
            "Regenerated {} stars for a {}x{} window",
            starfield.get_stars().len(),
            size.width,
            size.height
        );
    }

    /// Replaces all star sprites whenever the starfield changed
    pub fn sync_sprites_system(
        mut commands: Commands,
        starfield: Res<Starfield>,
        sprites: Query<Entity, With<StarSprite>>,
    ) {
        if !starfield.is_changed() {
            return;
        }
        for entity in sprites.iter() {
            commands.entity(entity).despawn();
        }
        for star in starfield.get_stars() {
            commands.spawn((
                StarSprite,
                SpriteBundle {
                    sprite: Sprite {
                        color: Color::WHITE,
                        custom_size: Some(Vec2::splat(star.size)),
                        anchor: Anchor::TopLeft,
                        ..Default::default()
                    },
                    transform: Transform::from_translation(star.position.to_world(STAR_Z)),
                    ..Default::default()
                },
            ));
        }
    }
}
