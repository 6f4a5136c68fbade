//! Static home page sections.

use gudang_sdk::gudang_streaming::escape_html;

use crate::site::Site;

const TAGLINE: &str = "Menyediakan produk original multi-brand berkualitas untuk pria, wanita, dan anak-anak di seluruh Indonesia. Produk 100% Original";

const FEATURES: [(&str, &str); 3] = [
    (
        "20+ Tahun Pengalaman",
        "Kami telah menjadi distributor terpercaya di industri pakaian dalam selama lebih dari dua dekade.",
    ),
    (
        "Produk 100% Original",
        "Kami menjamin keaslian setiap produk yang kami tawarkan, langsung dari merek-merek ternama.",
    ),
    (
        "Distribusi Nasional",
        "Melayani pelanggan dan mitra bisnis di seluruh penjuru Indonesia dengan layanan yang handal.",
    ),
];

/// Number of customer testimonial images.
pub const TESTIMONIAL_COUNT: usize = 10;

/// Render the hero section.
pub fn render_hero(site: &Site) -> String {
    format!(
        r#"<section id="hero" class="hero">
    <div class="container">
        <div>
            <h1>{name}</h1>
            <p>{tagline}</p>
            <a class="btn" href="{contact}" target="_blank" rel="noopener noreferrer">Hubungi Kami &rarr;</a>
        </div>
        <div class="hero-images">
            <img class="hero-main" src="{img1}" alt="Stok gudang pakaian dalam">
            <img class="hero-sub-1" src="{img2}" alt="Detail produk 1">
            <img class="hero-sub-2" src="{img3}" alt="Detail produk 2">
        </div>
    </div>
</section>
"#,
        name = escape_html(site.store_name()),
        tagline = TAGLINE,
        contact = escape_html(&site.contact.general_link()),
        img1 = escape_html(&site.asset("hero-1.jpg")),
        img2 = escape_html(&site.asset("hero-2.jpg")),
        img3 = escape_html(&site.asset("hero-3.jpg")),
    )
}

/// Render the "about us" section with its three feature blocks.
pub fn render_about(site: &Site) -> String {
    let features: String = FEATURES
        .iter()
        .map(|(title, description)| {
            format!(
                r#"<div class="feature"><div><h3>{}</h3><p>{}</p></div></div>"#,
                title, description
            )
        })
        .collect();

    format!(
        r#"<section id="about" class="section">
    <div class="container">
        <h2 class="section-title">Penyedia Pakaian Dalam Terpercaya Anda</h2>
        <p class="section-lead">Berkomitmen pada kualitas dan keaslian, kami hadir sebagai solusi utama untuk kebutuhan pakaian dalam multi-brand di seluruh Indonesia.</p>
        <div class="about-grid">
            <img class="about-image" src="{image}" alt="{name}">
            <div class="about-card">
                <p><strong>{name}</strong> adalah distributor resmi berbagai merek pakaian dalam berkualitas tinggi. Dengan fondasi yang dibangun di atas kepercayaan dan pengalaman, kami bangga menjadi mitra andalan Anda.</p>
                {features}
            </div>
        </div>
    </div>
</section>
"#,
        image = escape_html(&site.asset("hero-5.png")),
        name = escape_html(site.store_name()),
        features = features
    )
}

/// Render the testimonial gallery.
pub fn render_testimonials(site: &Site) -> String {
    let images: String = (1..=TESTIMONIAL_COUNT)
        .map(|n| {
            format!(
                r#"<img src="{}" alt="Testimoni Pelanggan {}" loading="lazy">"#,
                escape_html(&site.asset(&format!("testimonials/testimony-{}.png", n))),
                n
            )
        })
        .collect();

    format!(
        r#"<section id="testimonials" class="section">
    <div class="container">
        <h2 class="section-title">Testimoni Pelanggan</h2>
        <p class="section-lead">Apa kata mereka yang sudah berbelanja di {name}.</p>
        <div class="testimonials">{images}</div>
    </div>
</section>
"#,
        name = escape_html(site.store_name()),
        images = images
    )
}

/// Render the contact call-to-action.
pub fn render_contact(site: &Site) -> String {
    format!(
        r#"<section id="contact" class="section">
    <div class="container">
        <div class="contact-card">
            <h2>Hubungi kami untuk pemesanan atau pertanyaan lebih lanjut!</h2>
            <a class="btn" href="{href}" target="_blank" rel="noopener noreferrer">Hubungi via WhatsApp &rarr;</a>
        </div>
    </div>
</section>
"#,
        href = escape_html(&site.contact.general_link())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_sdk::gudang_core::SiteConfig;

    fn site() -> Site {
        Site::from_config(SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_hero_links_to_general_inquiry() {
        let html = render_hero(&site());
        assert!(html.contains("<h1>Gudang Pakaian Dalam</h1>"));
        assert!(html.contains("https://wa.me/6281210132385?text=Halo%20Gudang%20Pakaian%20Dalam"));
        assert!(html.contains("/assets/hero-1.jpg"));
    }

    #[test]
    fn test_about_has_three_features() {
        let html = render_about(&site());
        assert_eq!(html.matches(r#"class="feature""#).count(), 3);
        assert!(html.contains("Distribusi Nasional"));
    }

    #[test]
    fn test_ten_testimonials() {
        let html = render_testimonials(&site());
        assert_eq!(html.matches("<img ").count(), TESTIMONIAL_COUNT);
        assert!(html.contains(r#"alt="Testimoni Pelanggan 10""#));
        assert!(html.contains("/assets/testimonials/testimony-1.png"));
    }

    #[test]
    fn test_contact_section() {
        let html = render_contact(&site());
        assert!(html.contains(r#"id="contact""#));
        assert!(html.contains("Hubungi via WhatsApp"));
    }
}
