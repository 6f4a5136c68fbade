//! Shared stylesheet, inlined into every shell.

/// Google Fonts stylesheet for Outfit.
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Outfit:wght@400;600;700&display=swap";

/// CSS for all storefront pages.
pub const STYLES: &str = r#"
:root { --primary: #CAAB8C; --secondary: #594838; --light: #F0E3D2; }
* { box-sizing: border-box; }
body { font-family: 'Outfit', sans-serif; margin: 0; background: var(--light); color: var(--secondary); }
a { color: inherit; }
img { display: block; max-width: 100%; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
.section { padding: 5rem 0; }
.section-title { font-size: 2.25rem; font-weight: 700; margin: 0; text-align: center; }
.section-lead { font-size: 1.125rem; opacity: 0.8; margin: 0.5rem 0 2.5rem; text-align: center; }
.error { color: #dc2626; text-align: center; padding: 2.5rem 0; }
.btn { display: inline-block; background: var(--secondary); color: #fff; font-weight: 700; padding: 0.75rem 2rem; border-radius: 0.5rem; text-decoration: none; border: none; }
.btn[disabled], .btn--disabled { background: #9ca3af; cursor: not-allowed; }

/* Header */
.site-header { position: sticky; top: 0; z-index: 50; background: var(--primary); box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.site-header .container { display: flex; align-items: center; justify-content: space-between; height: 80px; }
.logo { font-size: 1.25rem; font-weight: 700; letter-spacing: 0.1em; text-decoration: none; }
.nav { display: flex; gap: 2rem; }
.nav a { text-decoration: none; padding: 0.5rem 0; }
.page-header { background: var(--light); border-bottom: 1px solid var(--primary); }
.page-header .container { display: flex; align-items: center; gap: 0.5rem; height: 64px; }
.page-header h1 { font-size: 1.5rem; margin: 0; }
.back-link { text-decoration: none; font-size: 1.5rem; }

/* Hero */
.hero { min-height: calc(100vh - 80px); display: flex; align-items: center; background: radial-gradient(ellipse at center, var(--light), #fff); }
.hero .container { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
.hero h1 { font-size: 3.75rem; margin: 0 0 1.5rem; line-height: 1.1; }
.hero p { font-size: 1.25rem; color: #4b5563; margin-bottom: 2rem; }
.hero-images { position: relative; height: 600px; }
.hero-images img { position: absolute; object-fit: cover; border-radius: 1.5rem; box-shadow: 0 25px 50px rgba(0,0,0,0.25); }
.hero-main { width: 70%; height: 80%; top: 10%; left: 15%; z-index: 1; }
.hero-sub-1 { width: 35%; height: 40%; top: 5%; left: 0; z-index: 2; }
.hero-sub-2 { width: 40%; height: 45%; bottom: 5%; right: 0; }

/* Banners */
.banners { display: flex; gap: 1rem; overflow-x: auto; scroll-snap-type: x mandatory; padding: 2rem 0; }
.banner { flex: 0 0 100%; aspect-ratio: 21 / 9; scroll-snap-align: center; border-radius: 1rem; overflow: hidden; }
.banner img { width: 100%; height: 100%; object-fit: cover; }

/* About */
.about-grid { display: grid; grid-template-columns: 1fr 1fr; align-items: center; }
.about-image { border-radius: 1rem; aspect-ratio: 4 / 3; object-fit: cover; box-shadow: 0 25px 50px rgba(0,0,0,0.25); }
.about-card { background: rgba(240,227,210,0.8); padding: 3rem; border-radius: 1rem; margin-left: -6rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1); }
.feature { display: flex; gap: 1rem; margin-top: 1.5rem; }
.feature h3 { margin: 0; font-size: 1.125rem; }
.feature p { margin: 0.25rem 0 0; opacity: 0.8; }

/* Brands */
.marquee { display: flex; overflow: hidden; white-space: nowrap; }
.marquee-track { display: flex; animation: marquee 40s linear infinite; }
.marquee-track:hover { animation-play-state: paused; }
.brand { margin: 0 2rem; flex-shrink: 0; display: flex; align-items: center; }
.brand img { height: 6rem; max-width: 150px; object-fit: contain; }
.skeleton-logo { height: 6rem; width: 6rem; border-radius: 50%; background: #e5e7eb; margin: 0 2rem; flex-shrink: 0; }
@keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }

/* Product cards */
.product-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem 1rem; }
.card { display: block; background: #fff; border-radius: 0.5rem; padding: 1rem; text-decoration: none; box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
.card-image { position: relative; aspect-ratio: 1; border-radius: 0.375rem; overflow: hidden; background: #f3f4f6; }
.card-image img { width: 100%; height: 100%; object-fit: cover; }
.badge { position: absolute; top: 0.5rem; left: 0.5rem; background: #dc2626; color: #fff; font-size: 0.75rem; font-weight: 700; padding: 0.25rem 0.5rem; border-radius: 0.375rem; }
.card h3 { font-size: 1rem; margin: 1rem 0 0; height: 3rem; overflow: hidden; }
.card-sizes { font-size: 0.875rem; color: #6b7280; margin: 0.25rem 0 0; }
.card-description { font-size: 0.875rem; color: #4b5563; height: 2.5rem; overflow: hidden; margin: 0.5rem 0 0; }
.price-original { color: #9ca3af; text-decoration: line-through; font-size: 0.875rem; margin: 1rem 0 0; }
.price-current { font-weight: 700; font-size: 1.25rem; margin: 0; }
.price-current--sale { color: #dc2626; }
.skeleton-card { background: #fff; border-radius: 0.5rem; padding: 1rem; }
.skeleton-block { background: #e5e7eb; border-radius: 0.25rem; margin-top: 0.5rem; height: 1rem; }
.skeleton-block--image { aspect-ratio: 1; height: auto; margin-top: 0; }
.more { text-align: center; margin-top: 4rem; }
.empty { text-align: center; padding: 5rem 0; color: #4b5563; font-size: 1.125rem; }

/* Testimonials */
.testimonials { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; }
.testimonials img { width: 100%; aspect-ratio: 9 / 16; object-fit: cover; border-radius: 1rem; }

/* Contact */
.contact-card { background: rgba(202,171,140,0.3); border-radius: 1rem; padding: 4rem; text-align: center; }
.contact-card h2 { font-size: 2.25rem; max-width: 42rem; margin: 0 auto 2rem; }

/* Footer */
.site-footer { background: var(--secondary); color: rgba(240,227,210,0.7); padding: 4rem 0 2rem; }
.footer-grid { display: grid; grid-template-columns: 5fr 2fr 2fr 3fr; gap: 3rem; }
.site-footer h3 { color: #fff; margin: 0 0 1rem; }
.site-footer ul { list-style: none; padding: 0; margin: 0; }
.site-footer li { margin-bottom: 0.5rem; }
.site-footer a { text-decoration: none; }
.maps-link { display: inline-block; margin-top: 1rem; border: 1px solid rgba(240,227,210,0.5); padding: 0.5rem 1rem; border-radius: 0.375rem; font-weight: 700; }
.footer-bottom { display: flex; justify-content: space-between; border-top: 1px solid rgba(240,227,210,0.2); margin-top: 3rem; padding-top: 2rem; }
.socials { display: flex; gap: 0.75rem; }

/* Catalog page */
.search { display: flex; gap: 1rem; padding: 1.5rem 0; }
.search input { flex: 1; padding: 0.75rem 1rem; border: 1px solid var(--primary); border-radius: 0.5rem; font: inherit; }
.search select { padding: 0.75rem; border: 1px solid var(--primary); border-radius: 0.5rem; font: inherit; }
.clear-link { align-self: center; }

/* Product detail */
.detail { display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; padding: 2.5rem 0; }
.gallery-main { aspect-ratio: 1; background: #fff; border-radius: 0.5rem; overflow: hidden; }
.gallery-main img { width: 100%; height: 100%; object-fit: cover; }
.thumbnails { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-top: 1rem; }
.thumbnail { display: block; aspect-ratio: 1; border-radius: 0.375rem; overflow: hidden; border: 2px solid transparent; }
.thumbnail--selected { border-color: var(--secondary); }
.thumbnail img { width: 100%; height: 100%; object-fit: cover; }
.detail h1 { font-size: 2.25rem; margin: 0; }
.detail-price { display: flex; align-items: baseline; gap: 1rem; margin: 1rem 0; }
.detail-price .price-current { font-size: 1.875rem; }
.detail-price .price-original { font-size: 1.25rem; margin: 0; }
.variants { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.variant { min-width: 3rem; padding: 0.5rem 1rem; border: 1px solid var(--secondary); border-radius: 0.375rem; text-align: center; text-decoration: none; background: #fff; font: inherit; }
.variant--selected { background: var(--secondary); color: #fff; }
.variant[disabled] { border-color: #d1d5db; color: #9ca3af; text-decoration: line-through; cursor: not-allowed; }
.description { border-top: 1px solid #e5e7eb; margin-top: 2rem; }
.description-toggle { display: flex; justify-content: space-between; text-decoration: none; padding: 1.5rem 0; font-weight: 600; }
.description p { white-space: pre-wrap; line-height: 1.6; color: #4b5563; margin: 0 0 1.5rem; }
.cta { display: block; width: 100%; margin-top: 2rem; padding: 1rem 2rem; text-align: center; }
.notice { text-align: center; padding: 5rem 0; min-height: 60vh; }
.notice h2 { font-size: 1.5rem; }

@media (max-width: 768px) {
  .hero .container, .about-grid, .detail { grid-template-columns: 1fr; }
  .product-grid { grid-template-columns: repeat(2, 1fr); }
  .testimonials { grid-template-columns: repeat(2, 1fr); }
  .footer-grid { grid-template-columns: 1fr; }
  .about-card { margin-left: 0; }
  .nav { display: none; }
}
"#;
