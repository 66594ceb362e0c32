//! Usage-profile predicates. Each profile lists hardware floors (and for the
//! light profiles, ceilings) that must all hold for the build to earn the
//! usage points.

use crate::build::Build;
use crate::preferences::Usage;

use super::CRITERION_POINTS;

/// Points earned by `build` for `usage`: [`CRITERION_POINTS`] or zero.
pub fn usage_score(usage: Usage, build: &Build) -> f64 {
    if fits_usage(usage, build) {
        CRITERION_POINTS
    } else {
        0.0
    }
}

pub fn fits_usage(usage: Usage, build: &Build) -> bool {
    match usage {
        Usage::Office => fits_office(build),
        Usage::Gaming => fits_gaming(build),
        Usage::GraphicDesign => fits_graphic_design(build),
        Usage::VideoEditing => fits_video_editing(build),
        Usage::WebBrowsing => fits_web_browsing(build),
        Usage::Education => fits_education(build),
        Usage::Architecture => fits_architecture(build),
    }
}

fn gpu_power(build: &Build) -> Option<u32> {
    build.gpu().map(|gpu| gpu.power)
}

fn fits_office(build: &Build) -> bool {
    build.cpu().performance >= 10
        && build.ram().capacity >= 8
        && build.storage().capacity > 500
        && matches!(gpu_power(build), Some(power) if power < 30)
}

fn fits_gaming(build: &Build) -> bool {
    matches!(gpu_power(build), Some(power) if power >= 50)
        && build.ram().capacity >= 16
        && build.cpu().performance >= 64
        && build.storage().is_ssd()
}

fn fits_graphic_design(build: &Build) -> bool {
    matches!(gpu_power(build), Some(power) if power >= 30)
        && build.ram().capacity >= 16
        && build.storage().capacity > 1_000
        && build.storage().is_ssd()
}

fn fits_video_editing(build: &Build) -> bool {
    matches!(gpu_power(build), Some(power) if power >= 30)
        && build.ram().capacity >= 32
        && build.storage().capacity > 1_000
        && build.storage().is_ssd()
}

// A CPU without integrated graphics counts as 0 for the iGPU ceiling.
fn fits_web_browsing(build: &Build) -> bool {
    (10..=30).contains(&build.cpu().performance)
        && build.ram().capacity == 8
        && build.storage().is_ssd()
        && build.storage().capacity < 500
        && build.gpu().is_none()
        && build.cpu().integrated_graphics.unwrap_or(0) < 20
}

fn fits_education(build: &Build) -> bool {
    let capacity = build.storage().capacity;
    let graphics = matches!(gpu_power(build), Some(power) if power < 40)
        || matches!(build.cpu().integrated_graphics, Some(power) if power < 60);

    (30..=60).contains(&build.cpu().performance)
        && build.ram().capacity > 8
        && build.ram().capacity <= 16
        && build.storage().is_ssd()
        && capacity > 128
        && capacity <= 500
        && graphics
}

fn fits_architecture(build: &Build) -> bool {
    matches!(gpu_power(build), Some(power) if power >= 60)
        && build.cpu().performance >= 60
        && build.ram().capacity >= 32
        && build.storage().capacity > 1_000
        && build.storage().is_ssd()
}
