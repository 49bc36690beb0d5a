//! Tuning constants shared by the simulation and the frontend.
//! Values are literal playtest numbers; they are not derived from a model.

/// Simulation ticks per second.
pub const TICK_RATE_HZ: u32 = 60;
/// Pre-game menu refresh rate.
pub const MENU_RATE_HZ: u32 = 30;

pub const VIEWPORT_WIDTH: f32 = 800.0;
pub const VIEWPORT_HEIGHT: f32 = 600.0;
pub const LEVEL_WIDTH: f32 = 2000.0;
pub const LEVEL_HEIGHT: f32 = 2000.0;

pub const BOUNDARY_THICKNESS: f32 = 10.0;
pub const OBSTACLE_COUNT: usize = 100;
pub const OBSTACLE_MIN_SIZE: i32 = 100;
pub const OBSTACLE_MAX_SIZE: i32 = 200;
pub const OBSTACLE_EDGE_MARGIN: i32 = 50;
/// Re-roll budget per obstacle before it is dropped.
pub const OBSTACLE_PLACEMENT_ATTEMPTS: u32 = 16;
/// Padding kept free of obstacles around spawn, exit and notes.
pub const LANDMARK_CLEARANCE: f32 = 20.0;

pub const PLAYER_SIZE: f32 = 10.0;
pub const PLAYER_SPEED: f32 = 3.0;
pub const PLAYER_SPAWN_X: f32 = 100.0;
pub const PLAYER_SPAWN_Y: f32 = 100.0;
/// Moving ticks between two footstep pulses.
pub const STEP_INTERVAL_TICKS: u32 = 20;

pub const ENEMY_SIZE: f32 = 14.0;
pub const ENEMY_COUNT: usize = 5;
pub const ENEMY_SPAWN_MIN: i32 = 200;
pub const ENEMY_SPAWN_MAX: i32 = 1800;
pub const ENEMY_ARRIVAL_DISTANCE: f32 = 5.0;
pub const ALERT_MAX: u8 = 255;
pub const ALERT_DECAY: u8 = 5;

pub const PULSE_START_RADIUS: f32 = 10.0;
pub const PULSE_GROWTH: f32 = 6.0;
pub const WAVEFRONT_BAND: f32 = 10.0;
pub const RAY_COUNT: usize = 60;
pub const FOOTSTEP_MAX_RADIUS: f32 = 100.0;
pub const FOOTSTEP_POWER: u8 = 2;
pub const CLAP_MAX_RADIUS: f32 = 600.0;
pub const CLAP_POWER: u8 = 1;

pub const BLIP_LIFE: i32 = 255;
pub const BLIP_FADE: i32 = 3;

pub const EXIT_SIZE: f32 = 20.0;
pub const EXIT_X: f32 = LEVEL_WIDTH - 100.0;
pub const EXIT_Y: f32 = LEVEL_HEIGHT - 100.0;
pub const NOTE_SIZE: f32 = 30.0;
pub const NOTE_DISPLAY_TICKS: u32 = 300;

pub const SANITY_MAX: f32 = 100.0;
pub const FOOTSTEP_SANITY_COST: f32 = 0.5;
pub const CLAP_SANITY_COST: f32 = 1.0;
pub const SILENCE_SANITY_COST: f32 = 0.2;
pub const SILENCE_PERIOD_TICKS: u32 = 600;
pub const WHISPER_THRESHOLD: f32 = 60.0;
pub const HALLUCINATION_THRESHOLD: f32 = 30.0;
pub const DISTORTION_THRESHOLD: f32 = 25.0;
/// Sanity above this draws the bar in the calm color.
pub const SANITY_BAR_WARNING: f32 = 30.0;

pub const HALLUCINATION_CHANCE: f64 = 0.01;
pub const HALLUCINATION_SPREAD: i32 = 300;
pub const HALLUCINATION_MIN_LIFE: i32 = 100;
pub const HALLUCINATION_MAX_LIFE: i32 = 200;

pub const WHISPER_MIN_TICKS: i32 = 300;
pub const WHISPER_MAX_TICKS: i32 = 600;

pub const DISTORTION_MAX_TINT: i32 = 40;
pub const DISTORTION_ALPHA: u8 = 20;
