//! Summary page.

use crate::format;
use crate::prelude::*;
use crate::templates::navbar::NavBar;

markup::define! {
    Index(reading: Option<SensorReading>, last_on: String) {
        section.hero."is-info" {
            div."hero-head" { @NavBar {} }
            div."hero-body" {
                div.container {
                    h1.title."is-4" { "Dashboard" }
                    h2.subtitle."is-6" { "Latest readings" }
                }
            }
        }
        section.section {
            div.container {
                @match reading {
                    Some(reading) => {
                        div.columns {
                            div.column {
                                div.notification {
                                    p.title."is-6" { "Ambient" }
                                    p."has-text-centered"."has-text-weight-bold" {
                                        @format::temp_string(reading.ambient_temp)
                                    }
                                }
                            }
                            div.column {
                                div.notification {
                                    p.title."is-6" { "Tank top" }
                                    p."has-text-centered"."has-text-weight-bold" {
                                        @format::temp_string(reading.tank_top_temp)
                                    }
                                }
                            }
                            div.column {
                                div.notification {
                                    p.title."is-6" { "Tank bottom" }
                                    p."has-text-centered"."has-text-weight-bold" {
                                        @format::temp_string(reading.tank_bottom_temp)
                                    }
                                }
                            }
                            div.column {
                                div.notification {
                                    p.title."is-6" { "Washer 3" }
                                    p."has-text-centered"."has-text-weight-bold" {
                                        @format::washer_state_string(reading.washer_3_on)
                                    }
                                    p."is-size-7"."has-text-centered" { @last_on }
                                }
                            }
                        }
                    }
                    None => {
                        div.notification { "No readings yet." }
                    }
                }
            }
        }
    }

    Unavailable {
        section.hero."is-info" {
            div."hero-head" { @NavBar {} }
        }
        section.section {
            div.container {
                div.notification."is-danger" {
                    "Unable to connect to the database."
                }
            }
        }
    }
}
