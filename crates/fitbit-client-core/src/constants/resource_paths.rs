// ABOUTME: Catalog of time-series resource paths accepted by the Fitbit API
// ABOUTME: Membership is checked for any method whose path embeds a resource-path placeholder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Known values for the `resource-path` parameter
pub const RESOURCE_PATHS: &[&str] = &[
    // Activity
    "activities/calories",
    "activities/caloriesBMR",
    "activities/steps",
    "activities/distance",
    "activities/floors",
    "activities/elevation",
    "activities/minutesSedentary",
    "activities/minutesLightlyActive",
    "activities/minutesFairlyActive",
    "activities/minutesVeryActive",
    "activities/activeScore",
    "activities/activityCalories",
    // Tracker-only activity
    "activities/tracker/calories",
    "activities/tracker/steps",
    "activities/tracker/distance",
    "activities/tracker/floors",
    "activities/tracker/elevation",
    "activities/tracker/minutesSedentary",
    "activities/tracker/minutesLightlyActive",
    "activities/tracker/minutesFairlyActive",
    "activities/tracker/minutesVeryActive",
    "activities/tracker/activeScore",
    "activities/tracker/activityCalories",
    // Body
    "body/weight",
    "body/bmi",
    "body/fat",
    // Food
    "foods/log/caloriesIn",
    "foods/log/water",
    // Sleep
    "sleep/startTime",
    "sleep/timeInBed",
    "sleep/minutesAsleep",
    "sleep/awakeningsCount",
    "sleep/minutesAwake",
    "sleep/minutesToFallAsleep",
    "sleep/minutesAfterWakeup",
    "sleep/efficiency",
];

/// Check whether `path` is a known time-series resource path (exact match)
#[must_use]
pub fn is_known_resource_path(path: &str) -> bool {
    RESOURCE_PATHS.contains(&path)
}
