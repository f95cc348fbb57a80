//! Simulates a foreign binding passing raw parameters across the boundary.
//!
//! Run with `RUST_LOG=strata_render=trace` to see the conversion events.

use std::ptr;

use strata_core::config::Config;
use strata_core::geometry::Size;
use strata_core::math::Vec2;
use strata_render::{BlendCodes, Texture, TextureHandle, Transform, render_states_from_raw};

fn main() {
    strata_core::logging::init();

    let texture = Texture::new(TextureHandle(1), Size::new(128, 128));
    let matrix = Transform::IDENTITY
        .translate(Vec2::new(64.0, 64.0))
        .rotate(45.0)
        .matrix();

    // Alpha blending codes, as a binding would pass them.
    let codes = BlendCodes::new(6, 7, 0, 1, 7, 0);
    let states = unsafe {
        render_states_from_raw(&Config::default(), codes, matrix.as_ptr(), &texture, ptr::null())
    };
    match states {
        Ok(states) => tracing::info!("Built render states: {:?}", states),
        Err(e) => tracing::error!("Failed to build render states: {}", e),
    }

    // An unknown equation code, rejected by default and replaced when lenient.
    let bad = BlendCodes::new(6, 7, 9, 1, 7, 0);
    for config in [Config::default(), Config::lenient()] {
        let result = unsafe {
            render_states_from_raw(&config, bad, matrix.as_ptr(), ptr::null(), ptr::null())
        };
        match result {
            Ok(states) => {
                tracing::info!("{:?}: blend mode {:?}", config.invalid_codes, states.blend_mode)
            }
            Err(e) => tracing::warn!("{:?}: {}", config.invalid_codes, e),
        }
    }
}
