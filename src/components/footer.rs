use yew::prelude::*;

const COLUMNS: [(&str, &[&str]); 3] = [
    ("Product", &["Features", "Pricing", "API", "Integrations"]),
    ("Resources", &["Documentation", "Research", "Blog", "Support"]),
    ("Company", &["About", "Careers", "Privacy", "Terms"]),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_css = r#"
        .site-footer {
            background: #111827;
            color: #9ca3af;
            padding: 4rem 0;
        }
        .footer-inner {
            max-width: 1280px;
            margin: 0 auto;
            padding: 0 1.5rem;
        }
        .footer-grid {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 2rem;
        }
        .footer-logo {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            margin-bottom: 1rem;
        }
        .footer-logo-mark {
            width: 2rem;
            height: 2rem;
            background: linear-gradient(135deg, #9f1239, #881337);
            border-radius: 0.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.3);
        }
        .footer-logo span {
            font-size: 1.25rem;
            font-weight: 700;
            color: white;
        }
        .footer-blurb {
            font-size: 0.875rem;
            line-height: 1.6;
        }
        .footer-grid h4 {
            color: white;
            font-weight: 600;
            margin-bottom: 1rem;
        }
        .footer-grid ul {
            list-style: none;
            padding: 0;
            margin: 0;
            display: flex;
            flex-direction: column;
            gap: 0.5rem;
            font-size: 0.875rem;
        }
        .footer-grid a {
            color: inherit;
            text-decoration: none;
            transition: color 0.3s;
        }
        .footer-grid a:hover {
            color: #fb7185;
        }
        .footer-bottom {
            border-top: 1px solid #1f2937;
            margin-top: 3rem;
            padding-top: 2rem;
            text-align: center;
            font-size: 0.875rem;
        }
        @media (max-width: 768px) {
            .footer-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;
    html! {
        <footer class="site-footer">
            <style>{footer_css}</style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-logo">
                            <div class="footer-logo-mark">
                                <i class="fas fa-stethoscope"></i>
                            </div>
                            <span>{"DiagHer"}</span>
                        </div>
                        <p class="footer-blurb">
                            {"AI-powered gender-aware healthcare decision support system. \
                              Transforming women's health outcomes worldwide."}
                        </p>
                    </div>
                    { for COLUMNS.iter().map(|(title, links)| html! {
                        <div>
                            <h4>{*title}</h4>
                            <ul>
                                { for links.iter().map(|link| html! {
                                    <li><a href="#">{*link}</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{"© 2025 DiagHer. All rights reserved. Revolutionizing healthcare for women."}</p>
                </div>
            </div>
        </footer>
    }
}
