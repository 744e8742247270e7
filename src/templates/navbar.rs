// Shared navigation bar.
markup::define! {
    NavBar {
        nav.navbar[role = "navigation"] {
            div.container {
                div."navbar-menu"."is-active" {
                    div."navbar-start" {
                        a."navbar-item"[href = "/"] { "Home" }
                        a."navbar-item"[href = "/data"] { "History" }
                    }
                }
            }
        }
    }
}
