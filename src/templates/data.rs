//! History page.

use crate::consts::PAGE_SIZE;
use crate::format;
use crate::prelude::*;
use crate::templates::navbar::NavBar;
use crate::templates::DATE_FORMAT;

markup::define! {
    Data(readings: Vec<SensorReading>, offset: i64) {
        section.hero."is-info" {
            div."hero-head" { @NavBar {} }
            div."hero-body" {
                div.container {
                    h1.title."is-4" { "History" }
                    h2.subtitle."is-6" {
                        @readings.len() " readings at offset " @offset
                    }
                }
            }
        }
        section.section {
            div.container {
                table.table."is-fullwidth"."is-striped" {
                    thead {
                        tr {
                            th { "Date" }
                            th { "Tank top" }
                            th { "Tank bottom" }
                            th { "Ambient" }
                            th { "Washer 1" }
                            th { "Washer 2" }
                            th { "Washer 3" }
                        }
                    }
                    tbody {
                        @for reading in readings.iter() {
                            tr {
                                td { @reading.timestamp.format(DATE_FORMAT).to_string() }
                                td { @format::temp_string(reading.tank_top_temp) }
                                td { @format::temp_string(reading.tank_bottom_temp) }
                                td { @format::temp_string(reading.ambient_temp) }
                                td { @format::washer_state_string(reading.washer_1_on) }
                                td { @format::washer_state_string(reading.washer_2_on) }
                                td { @format::washer_state_string(reading.washer_3_on) }
                            }
                        }
                    }
                }
                nav.pagination {
                    @if *offset > 0 {
                        a."pagination-previous"[
                            href = format!("/data?s={}", (offset - PAGE_SIZE).max(0))
                        ] { "Newer" }
                    }
                    a."pagination-next"[
                        href = format!("/data?s={}", offset + PAGE_SIZE)
                    ] { "Older" }
                }
            }
        }
    }
}
