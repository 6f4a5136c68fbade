//! Header and footer chrome.

use gudang_sdk::gudang_streaming::escape_html;

use crate::site::Site;

/// Home page anchors, in page order.
pub const NAV_ITEMS: [(&str, &str); 6] = [
    ("hero", "Beranda"),
    ("about", "Tentang Kami"),
    ("brands", "Merek"),
    ("catalog", "Katalog"),
    ("testimonials", "Testimoni"),
    ("contact", "Kontak kami"),
];

const ADDRESS_LINES: [&str; 4] = [
    "Tianseng Komp. Rukan Pangeran Jayakarta Center Blok E2 No. 12",
    "Jl. Pangeran Jayakarta No. 73",
    "Kel. Mangga Dua Selatan, Kec. Sawah Besar",
    "Kota Adm. Jakarta Pusat, 10730",
];

const MAPS_URL: &str = "https://maps.app.goo.gl/fukxBhKdCRa6iAgF9";

const ONLINE_STORES: [(&str, &str); 3] = [
    ("Tiktok Shop by Tokopedia", "https://www.tiktok.com/@gudangpakaiandalam"),
    ("Tokopedia", "https://www.tokopedia.com/gudangunderwear"),
    ("Shopee", "https://shopee.co.id/gudangunderwear4"),
];

const OFFLINE_STORES: [(&str, &str); 2] = [
    ("Jagoan Underwear", "https://jagoanunderwear.vercel.app/"),
    ("Regino Store", "https://reginostore.vercel.app/"),
];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("TT", "https://www.tiktok.com/@gudangpakaiandalam"),
    ("IG", "https://www.instagram.com/gudangpakaiandalam.katalog/"),
    ("FB", "https://web.facebook.com/dodi.rostandi.5"),
    ("YT", "https://www.youtube.com/@officialgudangpakaiandalam"),
];

/// Sticky home page header with in-page navigation.
pub fn render_site_header(site: &Site) -> String {
    let links: String = NAV_ITEMS
        .iter()
        .map(|(id, label)| format!(r##"<a href="#{}">{}</a>"##, id, label))
        .collect();

    format!(
        r##"<header class="site-header">
    <div class="container">
        <a class="logo" href="#hero">{name}</a>
        <nav class="nav">{links}</nav>
    </div>
</header>
"##,
        name = escape_html(site.store_name()),
        links = links
    )
}

/// Title bar with a back arrow, used by the catalog and detail pages.
pub fn render_page_header(title: &str, back_href: &str) -> String {
    format!(
        r#"<header class="page-header">
    <div class="container">
        <a class="back-link" href="{back}" aria-label="Kembali">&larr;</a>
        <h1>{title}</h1>
    </div>
</header>
"#,
        back = escape_html(back_href),
        title = escape_html(title)
    )
}

fn render_link_list(links: &[(&str, &str)]) -> String {
    links
        .iter()
        .map(|(name, url)| {
            format!(
                r#"<li><a href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                url, name
            )
        })
        .collect()
}

/// Footer with address, store links, socials and the copyright year.
pub fn render_footer(site: &Site) -> String {
    let address = ADDRESS_LINES.join("<br>");

    let socials: String = SOCIAL_LINKS
        .iter()
        .map(|(name, url)| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                url, name
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer">
    <div class="container">
        <div class="footer-grid">
            <div>
                <h3>{name}</h3>
                <p>{address}</p>
                <a class="maps-link" href="{maps}" target="_blank" rel="noopener noreferrer">Lihat Maps &rarr;</a>
            </div>
            <div>
                <h3>Toko Online</h3>
                <ul>{online}</ul>
            </div>
            <div>
                <h3>Toko Offline</h3>
                <ul>{offline}</ul>
            </div>
        </div>
        <div class="footer-bottom">
            <p>&copy; {year} {name}</p>
            <div class="socials">{socials}</div>
        </div>
    </div>
</footer>
"#,
        name = escape_html(site.store_name()),
        address = address,
        maps = MAPS_URL,
        online = render_link_list(&ONLINE_STORES),
        offline = render_link_list(&OFFLINE_STORES),
        year = site.year,
        socials = socials
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_sdk::gudang_core::SiteConfig;

    fn site() -> Site {
        Site::from_config(SiteConfig::default()).unwrap().with_year(2031)
    }

    #[test]
    fn test_header_lists_every_anchor() {
        let html = render_site_header(&site());
        for (id, label) in NAV_ITEMS {
            assert!(html.contains(&format!(r##"href="#{}">{}<"##, id, label)));
        }
    }

    #[test]
    fn test_footer_carries_year_and_stores() {
        let html = render_footer(&site());
        assert!(html.contains("&copy; 2031 Gudang Pakaian Dalam"));
        assert!(html.contains("https://shopee.co.id/gudangunderwear4"));
        assert!(html.contains("Regino Store"));
        assert!(html.contains(MAPS_URL));
    }

    #[test]
    fn test_page_header_escapes_title() {
        let html = render_page_header("Katalog <Produk>", "/");
        assert!(html.contains("<h1>Katalog &lt;Produk&gt;</h1>"));
        assert!(html.contains(r#"href="/""#));
    }
}
