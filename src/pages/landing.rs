use yew::prelude::*;

use crate::components::cta::CtaSection;
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::impact::ImpactSection;
use crate::components::navigation::Navigation;
use crate::components::problem::ProblemSection;
use crate::components::solution::SolutionSection;
use crate::components::technology::TechnologySection;
use crate::motion::scroll::use_scroll_y;

/// The single landing page. Owns the one scroll subscription and fans the
/// current offset out to the sections that move with it; the sections that
/// don't take no props.
#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll_y = use_scroll_y();
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <Navigation />
            <HeroSection {scroll_y} />
            <ProblemSection {scroll_y} />
            <SolutionSection />
            <TechnologySection {scroll_y} />
            <ImpactSection />
            <CtaSection {scroll_y} />
            <Footer />
        </div>
    }
}
