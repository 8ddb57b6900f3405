// ABOUTME: Static rule table for every supported Fitbit API method
// ABOUTME: Pure data describing auth, verbs, URL and POST parameters, forwarded headers, and paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MethodRule, PostParameterSpec, ResourcePathTemplate, UrlParameterSpec};
use crate::constants::headers::{ACCEPT_LANGUAGE, ACCEPT_LOCALE, SUBSCRIBER_ID};
use crate::models::AuthRequirement::{self, None as Public, TokenOrUserId, TokenRequired};
use crate::models::HttpVerb;

const NO_HEADERS: &[&str] = &[];
const LANGUAGE: &[&str] = &[ACCEPT_LANGUAGE];
const LOCALE: &[&str] = &[ACCEPT_LOCALE];
const LOCALE_AND_LANGUAGE: &[&str] = &[ACCEPT_LOCALE, ACCEPT_LANGUAGE];
const SUBSCRIBER: &[&str] = &[SUBSCRIBER_ID];

const NO_CLAUSES: PostParameterSpec = PostParameterSpec {
    required: &[],
    exclusive: &[],
    one_required: &[],
    required_if: &[],
};

const fn keys(keys: &'static [&'static str]) -> UrlParameterSpec {
    UrlParameterSpec::Flat(keys)
}

const fn path(segments: &'static [&'static str]) -> ResourcePathTemplate {
    ResourcePathTemplate::Flat(segments)
}

const fn get(
    name: &'static str,
    auth: AuthRequirement,
    url_params: UrlParameterSpec,
    request_headers: &'static [&'static str],
    resource_path: ResourcePathTemplate,
) -> MethodRule {
    MethodRule {
        name,
        auth,
        verb: HttpVerb::Get,
        url_params,
        post_params: None,
        request_headers,
        resource_path,
    }
}

const fn post(
    name: &'static str,
    url_params: UrlParameterSpec,
    post_params: Option<PostParameterSpec>,
    request_headers: &'static [&'static str],
    resource_path: ResourcePathTemplate,
) -> MethodRule {
    MethodRule {
        name,
        auth: TokenRequired,
        verb: HttpVerb::Post,
        url_params,
        post_params,
        request_headers,
        resource_path,
    }
}

const fn delete(
    name: &'static str,
    url_params: UrlParameterSpec,
    request_headers: &'static [&'static str],
    resource_path: ResourcePathTemplate,
) -> MethodRule {
    MethodRule {
        name,
        auth: TokenRequired,
        verb: HttpVerb::Delete,
        url_params,
        post_params: None,
        request_headers,
        resource_path,
    }
}

// Date, date range, or period ending at a base date
const BODY_LOG_URL: UrlParameterSpec = UrlParameterSpec::Variants(&[
    ("date", &["date"]),
    ("end-date", &["base-date", "end-date"]),
    ("period", &["base-date", "period"]),
]);

const BODY_FAT_PATH: ResourcePathTemplate = ResourcePathTemplate::Variants(&[
    ("date", &["user", "-", "body", "log", "fat", "date", "<date>"]),
    ("end-date", &["user", "-", "body", "log", "fat", "date", "<base-date>", "<end-date>"]),
    ("period", &["user", "-", "body", "log", "fat", "date", "<base-date>", "<period>"]),
]);

const BODY_WEIGHT_PATH: ResourcePathTemplate = ResourcePathTemplate::Variants(&[
    ("date", &["user", "-", "body", "log", "weight", "date", "<date>"]),
    ("end-date", &["user", "-", "body", "log", "weight", "date", "<base-date>", "<end-date>"]),
    ("period", &["user", "-", "body", "log", "weight", "date", "<base-date>", "<period>"]),
]);

const TIME_SERIES_URL: UrlParameterSpec = UrlParameterSpec::Variants(&[
    ("end-date", &["resource-path", "base-date", "end-date"]),
    ("period", &["resource-path", "base-date", "period"]),
]);

const TIME_SERIES_PATH: ResourcePathTemplate = ResourcePathTemplate::Variants(&[
    ("end-date", &["user", "-", "<resource-path>", "date", "<base-date>", "<end-date>"]),
    ("period", &["user", "-", "<resource-path>", "date", "<base-date>", "<period>"]),
]);

// Subscriptions target one collection, or every collection when none is named
const SUBSCRIPTION_URL: UrlParameterSpec = UrlParameterSpec::Variants(&[
    ("collection", &["collection-path", "subscription-id"]),
    ("all", &["subscription-id"]),
]);

const SUBSCRIPTION_PATH: ResourcePathTemplate = ResourcePathTemplate::Variants(&[
    ("collection", &["user", "-", "<collection-path>", "apiSubscriptions", "<subscription-id>"]),
    ("all", &["user", "-", "apiSubscriptions", "<subscription-id>"]),
]);

const SUBSCRIPTION_LIST_URL: UrlParameterSpec =
    UrlParameterSpec::Variants(&[("collection", &["collection-path"]), ("all", &[])]);

const SUBSCRIPTION_LIST_PATH: ResourcePathTemplate = ResourcePathTemplate::Variants(&[
    ("collection", &["user", "-", "<collection-path>", "apiSubscriptions"]),
    ("all", &["user", "-", "apiSubscriptions"]),
]);

pub(super) static METHOD_RULES: &[MethodRule] = &[
    // Activities
    get("api-browse-activities", Public, keys(&[]), LOCALE, path(&["activities"])),
    get(
        "api-get-activities",
        TokenOrUserId,
        keys(&["date"]),
        LOCALE_AND_LANGUAGE,
        path(&["user", "-", "activities", "date", "<date>"]),
    ),
    get(
        "api-get-activity",
        Public,
        keys(&["activity-id"]),
        LOCALE,
        path(&["activities", "<activity-id>"]),
    ),
    get(
        "api-get-activity-daily-goals",
        TokenRequired,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "activities", "goals", "daily"]),
    ),
    get(
        "api-get-activity-weekly-goals",
        TokenRequired,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "activities", "goals", "weekly"]),
    ),
    get(
        "api-get-activity-stats",
        TokenOrUserId,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "activities"]),
    ),
    get(
        "api-get-favorite-activities",
        TokenRequired,
        keys(&[]),
        LOCALE,
        path(&["user", "-", "activities", "favorite"]),
    ),
    get(
        "api-get-frequent-activities",
        TokenRequired,
        keys(&[]),
        LOCALE_AND_LANGUAGE,
        path(&["user", "-", "activities", "frequent"]),
    ),
    get(
        "api-get-recent-activities",
        TokenRequired,
        keys(&[]),
        LOCALE_AND_LANGUAGE,
        path(&["user", "-", "activities", "recent"]),
    ),
    post(
        "api-log-activity",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["startTime", "durationMillis", "date"],
            exclusive: &["activityId", "activityName"],
            one_required: &[],
            required_if: &[("activityName", "manualCalories")],
        }),
        LOCALE_AND_LANGUAGE,
        path(&["user", "-", "activities"]),
    ),
    post(
        "api-add-favorite-activity",
        keys(&["activity-id"]),
        None,
        NO_HEADERS,
        path(&["user", "-", "activities", "favorite", "<activity-id>"]),
    ),
    post(
        "api-update-activity-daily-goals",
        keys(&[]),
        Some(PostParameterSpec {
            one_required: &["caloriesOut", "activeMinutes", "floors", "distance", "steps"],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "activities", "goals", "daily"]),
    ),
    post(
        "api-update-activity-weekly-goals",
        keys(&[]),
        Some(PostParameterSpec {
            one_required: &["steps", "distance", "floors"],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "activities", "goals", "weekly"]),
    ),
    delete(
        "api-delete-activity-log",
        keys(&["activity-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "activities", "<activity-log-id>"]),
    ),
    delete(
        "api-delete-favorite-activity",
        keys(&["activity-id"]),
        NO_HEADERS,
        path(&["user", "-", "activities", "favorite", "<activity-id>"]),
    ),
    // Body
    get("api-get-body-fat", TokenRequired, BODY_LOG_URL, LANGUAGE, BODY_FAT_PATH),
    get(
        "api-get-body-fat-goal",
        TokenRequired,
        keys(&[]),
        NO_HEADERS,
        path(&["user", "-", "body", "log", "fat", "goal"]),
    ),
    get("api-get-body-weight", TokenRequired, BODY_LOG_URL, LANGUAGE, BODY_WEIGHT_PATH),
    get(
        "api-get-body-weight-goal",
        TokenRequired,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "body", "log", "weight", "goal"]),
    ),
    get(
        "api-get-body-measurements",
        TokenOrUserId,
        keys(&["date"]),
        LANGUAGE,
        path(&["user", "-", "body", "date", "<date>"]),
    ),
    post(
        "api-log-body-fat",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["fat", "date"],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "body", "log", "fat"]),
    ),
    post(
        "api-log-body-weight",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["weight", "date"],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "body", "log", "weight"]),
    ),
    post(
        "api-log-body-measurements",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["date"],
            one_required: &[
                "bicep", "calf", "chest", "fat", "forearm", "hips", "neck", "thigh", "waist",
                "weight",
            ],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "body"]),
    ),
    post(
        "api-update-fat-goal",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["fat"],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "body", "log", "fat", "goal"]),
    ),
    post(
        "api-update-weight-goal",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["startDate", "startWeight"],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "body", "log", "weight", "goal"]),
    ),
    delete(
        "api-delete-body-fat-log",
        keys(&["body-fat-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "body", "log", "fat", "<body-fat-log-id>"]),
    ),
    delete(
        "api-delete-body-weight-log",
        keys(&["body-weight-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "body", "log", "weight", "<body-weight-log-id>"]),
    ),
    // Blood pressure, glucose, heart rate
    get(
        "api-get-blood-pressure",
        TokenRequired,
        keys(&["date"]),
        NO_HEADERS,
        path(&["user", "-", "bp", "date", "<date>"]),
    ),
    get(
        "api-get-glucose",
        TokenRequired,
        keys(&["date"]),
        NO_HEADERS,
        path(&["user", "-", "glucose", "date", "<date>"]),
    ),
    get(
        "api-get-heart-rate",
        TokenRequired,
        keys(&["date"]),
        NO_HEADERS,
        path(&["user", "-", "heart", "date", "<date>"]),
    ),
    post(
        "api-log-blood-pressure",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["systolic", "diastolic", "date"],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "bp"]),
    ),
    post(
        "api-log-glucose",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["date"],
            one_required: &["hba1c", "tracker"],
            required_if: &[("tracker", "glucose")],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "glucose"]),
    ),
    post(
        "api-log-heart-rate",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["tracker", "heartRate", "date"],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "heart"]),
    ),
    delete(
        "api-delete-blood-pressure-log",
        keys(&["bp-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "bp", "<bp-log-id>"]),
    ),
    delete(
        "api-delete-heart-rate-log",
        keys(&["heart-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "heart", "<heart-log-id>"]),
    ),
    // Foods and water
    get(
        "api-search-foods",
        Public,
        keys(&["query"]),
        LOCALE,
        path(&["foods", "search"]),
    ),
    get(
        "api-get-food",
        Public,
        keys(&["food-id"]),
        LOCALE,
        path(&["foods", "<food-id>"]),
    ),
    get("api-get-food-units", Public, keys(&[]), LOCALE, path(&["foods", "units"])),
    get(
        "api-get-foods",
        TokenRequired,
        keys(&["date"]),
        LOCALE,
        path(&["user", "-", "foods", "log", "date", "<date>"]),
    ),
    get(
        "api-get-food-goals",
        TokenRequired,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "foods", "log", "goal"]),
    ),
    get(
        "api-get-favorite-foods",
        TokenRequired,
        keys(&[]),
        LOCALE,
        path(&["user", "-", "foods", "log", "favorite"]),
    ),
    get(
        "api-get-frequent-foods",
        TokenRequired,
        keys(&[]),
        LOCALE,
        path(&["user", "-", "foods", "log", "frequent"]),
    ),
    get(
        "api-get-recent-foods",
        TokenRequired,
        keys(&[]),
        LOCALE,
        path(&["user", "-", "foods", "log", "recent"]),
    ),
    get(
        "api-get-meals",
        TokenRequired,
        keys(&[]),
        LOCALE,
        path(&["user", "-", "meals"]),
    ),
    get(
        "api-get-water",
        TokenRequired,
        keys(&["date"]),
        LANGUAGE,
        path(&["user", "-", "foods", "log", "water", "date", "<date>"]),
    ),
    post(
        "api-create-food",
        keys(&[]),
        Some(PostParameterSpec {
            required: &[
                "defaultFoodMeasurementUnitId",
                "defaultServingSize",
                "calories",
                "name",
            ],
            ..NO_CLAUSES
        }),
        LOCALE,
        path(&["foods"]),
    ),
    post(
        "api-log-food",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["mealTypeId", "unitId", "amount", "date"],
            exclusive: &["foodId", "foodName"],
            one_required: &[],
            required_if: &[("foodName", "calories")],
        }),
        LOCALE,
        path(&["user", "-", "foods", "log"]),
    ),
    post(
        "api-log-water",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["amount", "date"],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "foods", "log", "water"]),
    ),
    post(
        "api-add-favorite-food",
        keys(&["food-id"]),
        None,
        NO_HEADERS,
        path(&["user", "-", "foods", "log", "favorite", "<food-id>"]),
    ),
    post(
        "api-update-food-goals",
        keys(&[]),
        Some(PostParameterSpec {
            exclusive: &["calories", "intensity"],
            ..NO_CLAUSES
        }),
        LOCALE_AND_LANGUAGE,
        path(&["user", "-", "foods", "log", "goal"]),
    ),
    delete(
        "api-delete-food-log",
        keys(&["food-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "foods", "log", "<food-log-id>"]),
    ),
    delete(
        "api-delete-favorite-food",
        keys(&["food-id"]),
        NO_HEADERS,
        path(&["user", "-", "foods", "log", "favorite", "<food-id>"]),
    ),
    delete(
        "api-delete-water-log",
        keys(&["water-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "foods", "log", "water", "<water-log-id>"]),
    ),
    // Sleep
    get(
        "api-get-sleep",
        TokenRequired,
        keys(&["date"]),
        NO_HEADERS,
        path(&["user", "-", "sleep", "date", "<date>"]),
    ),
    post(
        "api-log-sleep",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["startTime", "duration", "date"],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "sleep"]),
    ),
    delete(
        "api-delete-sleep-log",
        keys(&["sleep-log-id"]),
        NO_HEADERS,
        path(&["user", "-", "sleep", "<sleep-log-id>"]),
    ),
    // Devices and alarms
    get(
        "api-get-devices",
        TokenRequired,
        keys(&[]),
        NO_HEADERS,
        path(&["user", "-", "devices"]),
    ),
    get(
        "api-get-device",
        TokenRequired,
        keys(&["device-id"]),
        NO_HEADERS,
        path(&["user", "-", "devices", "<device-id>"]),
    ),
    get(
        "api-devices-get-alarms",
        TokenRequired,
        keys(&["device-id"]),
        LANGUAGE,
        path(&["user", "-", "devices", "tracker", "<device-id>", "alarms"]),
    ),
    post(
        "api-devices-add-alarm",
        keys(&["device-id"]),
        Some(PostParameterSpec {
            required: &["time", "enabled", "recurring", "weekDays"],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "devices", "tracker", "<device-id>", "alarms"]),
    ),
    post(
        "api-devices-update-alarm",
        keys(&["device-id", "alarm-id"]),
        Some(PostParameterSpec {
            required: &[
                "time",
                "enabled",
                "recurring",
                "weekDays",
                "snoozeLength",
                "snoozeCount",
            ],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "devices", "tracker", "<device-id>", "alarms", "<alarm-id>"]),
    ),
    delete(
        "api-devices-delete-alarm",
        keys(&["device-id", "alarm-id"]),
        NO_HEADERS,
        path(&["user", "-", "devices", "tracker", "<device-id>", "alarms", "<alarm-id>"]),
    ),
    // Friends, invitations, badges
    get(
        "api-get-friends",
        TokenOrUserId,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "friends"]),
    ),
    get(
        "api-get-friends-leaderboard",
        TokenRequired,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "friends", "leaderboard"]),
    ),
    get(
        "api-get-invites",
        TokenRequired,
        keys(&[]),
        NO_HEADERS,
        path(&["user", "-", "friends", "invitations"]),
    ),
    get(
        "api-get-badges",
        TokenOrUserId,
        keys(&[]),
        LOCALE,
        path(&["user", "-", "badges"]),
    ),
    post(
        "api-config-friends-leaderboard",
        keys(&[]),
        Some(PostParameterSpec {
            required: &["hideMeFromLeaderboard"],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "friends", "leaderboard"]),
    ),
    post(
        "api-create-invite",
        keys(&[]),
        Some(PostParameterSpec {
            exclusive: &["invitedUserEmail", "invitedUserId"],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "friends", "invitations"]),
    ),
    post(
        "api-accept-invite",
        keys(&["from-user-id"]),
        Some(PostParameterSpec {
            required: &["accept"],
            ..NO_CLAUSES
        }),
        NO_HEADERS,
        path(&["user", "-", "friends", "invitations", "<from-user-id>"]),
    ),
    // User profile
    get(
        "api-get-user-info",
        TokenOrUserId,
        keys(&[]),
        LANGUAGE,
        path(&["user", "-", "profile"]),
    ),
    post(
        "api-update-user-info",
        keys(&[]),
        Some(PostParameterSpec {
            one_required: &[
                "gender",
                "birthday",
                "height",
                "nickname",
                "aboutMe",
                "fullname",
                "country",
                "state",
                "city",
                "strideLengthWalking",
                "strideLengthRunning",
                "weightUnit",
                "heightUnit",
                "waterUnit",
                "glucoseUnit",
                "timezone",
                "foodsLocale",
                "locale",
                "localeLang",
                "localeCountry",
            ],
            ..NO_CLAUSES
        }),
        LANGUAGE,
        path(&["user", "-", "profile"]),
    ),
    // Time series
    get(
        "api-get-time-series",
        TokenOrUserId,
        TIME_SERIES_URL,
        LANGUAGE,
        TIME_SERIES_PATH,
    ),
    get(
        "api-get-intraday-time-series",
        TokenRequired,
        keys(&["resource-path", "date", "detail-level"]),
        NO_HEADERS,
        path(&["user", "-", "<resource-path>", "date", "<date>", "1d", "<detail-level>"]),
    ),
    // Subscriptions
    get(
        "api-list-subscriptions",
        TokenRequired,
        SUBSCRIPTION_LIST_URL,
        NO_HEADERS,
        SUBSCRIPTION_LIST_PATH,
    ),
    post(
        "api-add-subscription",
        SUBSCRIPTION_URL,
        None,
        SUBSCRIBER,
        SUBSCRIPTION_PATH,
    ),
    delete(
        "api-delete-subscription",
        SUBSCRIPTION_URL,
        SUBSCRIBER,
        SUBSCRIPTION_PATH,
    ),
];
