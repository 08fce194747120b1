use yew::prelude::*;

use crate::components::comment_popup::CommentPopup;
use crate::components::cookie_banner::CookieBanner;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::sections::cta::CtaSection;
use crate::sections::faq::FaqSection;
use crate::sections::features::FeaturesSection;
use crate::sections::hero::Hero;
use crate::sections::how_it_works::HowItWorks;
use crate::sections::use_case::UseCaseSection;

/// The landing page, top to bottom.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="home">
            <Navbar />
            <Hero />
            <FeaturesSection />
            <HowItWorks />
            <UseCaseSection />
            <FaqSection />
            <CtaSection />
            <Footer />
            <CommentPopup />
            <CookieBanner />
        </main>
    }
}
