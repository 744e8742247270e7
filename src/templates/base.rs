//! Page base.

markup::define! {
    Base(body: String) {
        @markup::doctype()
        html[lang = "en"] {
            head {
                title { "Farm Monitor" }
                meta[charset = "utf-8"];
                meta[name = "viewport", content = "width=device-width, initial-scale=1"];
                meta["http-equiv" = "refresh", content = "60"];
                link[
                    rel = "stylesheet",
                    href = "https://cdnjs.cloudflare.com/ajax/libs/bulma/0.9.4/css/bulma.min.css"
                ];
            }
            body {
                @markup::raw(body)
                footer.footer {
                    div.container {
                        p {
                            strong { "Farm Monitor" }
                            " — tank temperatures and washer states."
                        }
                    }
                }
            }
        }
    }
}
