use crate::components::feature_showcase::{FeatureShowcase, Showcase, SnippetLine};
use crate::components::signup_form::{use_signup_session, SignupForm};
use crate::effects::paw_trail::PawTrailOverlay;
use crate::pages::landing::DESCRIPTION_PREVIEW_CHARS;
use crate::utils::signup::SignupSource;
use crate::Route;
use yew::prelude::*;
use yew_router::components::Link;

const MOBILE_FEATURES: [(&str, &str, &str); 6] = [
    ("fas fa-mobile-screen", "Native Mobile App", "Optimized iOS & Android experience"),
    ("fas fa-bell", "Push Notifications", "Get notified when your matches are online"),
    ("fas fa-shield-halved", "Secure Messaging", "End-to-end encrypted mobile chats"),
    ("fas fa-heart", "Swipe to Match", "Intuitive mobile matching interface"),
    ("fas fa-code", "Mobile Code Sharing", "Share code snippets on the go"),
    ("fas fa-location-dot", "Location-Based", "Find nearby geek events and meetups"),
];

const SECURITY_POINTS: [(&str, &str, &str); 3] = [
    ("fas fa-fingerprint", "Biometric Lock", "Face ID, Touch ID, or PIN protection for your conversations"),
    ("fas fa-bell-slash", "Private Notifications", "Discreet notifications that don't reveal conversation content"),
    ("fas fa-mobile-screen", "Offline Mode", "Read messages and browse profiles even without internet"),
];

fn mobile_features() -> Vec<Showcase> {
    use SnippetLine::*;
    vec![
        Showcase {
            title: "Code on Mobile",
            description: "Share and view code snippets with syntax highlighting, perfectly formatted for mobile screens.",
            highlights: vec![
                ("fas fa-code", "Mobile-optimized syntax highlighting"),
                ("fas fa-terminal", "Touch-friendly command interface"),
                ("fas fa-share-nodes", "Quick code sharing between devices"),
            ],
            snippet_title: "Mobile Code Viewer",
            snippet: vec![
                Comment("// Mobile code sharing"),
                Command("const findLove = () => {"),
                Command("  return match.filter("),
                Command("    geek => geek.interests"),
                Command("      .includes('coding')"),
                Command("  )[0]"),
                Command("}"),
            ],
        },
        Showcase {
            title: "Mobile Privacy",
            description: "All the privacy features you love, optimized for mobile with biometric authentication.",
            highlights: vec![
                ("fas fa-lock", "Biometric app lock"),
                ("fas fa-shield-halved", "Secure mobile encryption"),
                ("fas fa-bell", "Private push notifications"),
            ],
            snippet_title: "Security Settings",
            snippet: vec![
                Comment("// Mobile security features"),
                Output("✓ Face ID enabled"),
                Output("✓ End-to-end encryption"),
                Output("✓ Anonymous mode: ON"),
                Output("✓ Private notifications"),
                Output("✓ Auto-lock: 5 minutes"),
            ],
        },
        Showcase {
            title: "Mobile Matching",
            description: "Swipe through potential matches based on interests, not photos. Mobile-first UX design.",
            highlights: vec![
                ("fas fa-heart", "Interest-based swiping"),
                ("fas fa-wand-magic-sparkles", "Anonymous profile cards"),
                ("fas fa-users", "Quick compatibility scoring"),
            ],
            snippet_title: "Match Interface",
            snippet: vec![
                Comment("// Current match preview"),
                Output("🐱 blue-catcoder42"),
                Output("Interests: React, Coffee, Cats"),
                Output("Languages: JavaScript, Python"),
                Output("Compatibility: 94%"),
                Output("👈 Swipe to connect"),
            ],
        },
    ]
}

#[function_component(Mobile)]
pub fn mobile() -> Html {
    // Hero and call-to-action forms share one session.
    let signup = use_signup_session(SignupSource::Mobile);
    let mobile_css = r#"
        .mobile-page {
            min-height: 100vh;
            position: relative;
        }
        .mobile-page .site-header {
            position: sticky;
            top: 0;
            z-index: 40;
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 1rem;
            border-bottom: 1px solid var(--border);
            background: rgba(24, 24, 27, 0.5);
            backdrop-filter: blur(6px);
        }
        .mobile-page .back-link {
            color: var(--muted);
            font-family: var(--mono);
            font-size: 0.875rem;
        }
        .app-icon {
            position: relative;
            width: 8rem;
            height: 8rem;
            margin: 0 auto 2rem;
            border-radius: 1.5rem;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 4rem;
            color: #fff;
            background: linear-gradient(135deg, var(--primary), var(--accent));
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        }
        .app-icon .corner {
            position: absolute;
            right: -0.5rem;
            bottom: -0.5rem;
            width: 2rem;
            height: 2rem;
            font-size: 1rem;
            border-radius: 999px;
            border: 4px solid var(--background);
            background: var(--primary);
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .mobile-hero {
            max-width: 56rem;
            margin: 0 auto;
            padding: 4rem 1rem;
            text-align: center;
        }
        .mobile-hero h1 {
            font-size: clamp(2.5rem, 6vw, 3.75rem);
            margin-bottom: 1.5rem;
        }
        .mobile-hero h1 .accent-line {
            display: block;
            color: var(--primary);
            font-family: var(--mono);
        }
        .store-badges {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1rem;
            margin-top: 2rem;
        }
        .store-badge {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 0.75rem 1.25rem;
            border: 1px solid var(--border);
            border-radius: 0.75rem;
            background: var(--card);
            text-align: left;
            opacity: 0.7;
        }
        .store-badge small {
            display: block;
            color: var(--muted);
            font-size: 0.75rem;
        }
        .cta-band {
            padding: 4rem 1rem;
            text-align: center;
            border-top: 1px solid var(--border);
            border-bottom: 1px solid var(--border);
            background: rgba(168, 85, 247, 0.05);
        }
    "#;

    html! {
        <div class="mobile-page">
            <style>{mobile_css}</style>
            <PawTrailOverlay />
            <header class="site-header">
                <Link<Route> to={Route::Home} classes="back-link">
                    <i class="fas fa-arrow-left"></i>{" Back"}
                </Link<Route>>
                <div>
                    <i class="fas fa-mobile-screen brand-icon"></i>
                    <span class="brand">{"cat2gether"}</span>
                    <span class="badge">{"Mobile"}</span>
                </div>
                <div class="spacer"></div>
            </header>

            <section class="mobile-hero">
                <div class="app-icon">
                    <i class="fas fa-cat"></i>
                    <span class="corner"><i class="fas fa-mobile-screen"></i></span>
                </div>
                <h1>
                    {"cat2gether"}
                    <span class="accent-line terminal-cursor">{"Mobile App"}</span>
                </h1>
                <p class="lede muted">
                    {"The complete geek dating experience in your pocket."}
                    <span class="mono accent">{" Native iOS & Android"}</span>{" apps with"}
                    <span class="mono primary">{" all the features"}</span>{" you love, optimized for mobile."}
                </p>
                <span class="pill"><i class="fas fa-tablet-screen-button"></i>{"Coming to App Stores Soon"}</span>
                <SignupForm session={signup.clone()} prompt="Get notified when the mobile app launches" />
                <div class="store-badges">
                    <div class="store-badge">
                        <span>{"📱"}</span>
                        <div><small>{"Download on the"}</small><strong class="mono">{"App Store"}</strong></div>
                    </div>
                    <div class="store-badge">
                        <span>{"▶"}</span>
                        <div><small>{"Get it on"}</small><strong class="mono">{"Google Play"}</strong></div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-heading">
                    <h2>{"Mobile-First Experience"}</h2>
                    <p>{"All the features you expect from cat2gether, optimized for your smartphone with intuitive mobile UX."}</p>
                </div>
                <div class="feature-grid">
                    {
                        MOBILE_FEATURES.iter().map(|(icon, title, desc)| html! {
                            <div class="feature-card">
                                <i class={*icon}></i>
                                <h3>{*title}</h3>
                                <p class="muted">{*desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section">
                <h2 class="section-title">{"Mobile Features That Get You"}</h2>
                <p class="muted mono">
                    <i class="fas fa-hand-pointer"></i>
                    {format!(" Tap to explore mobile features ({})", mobile_features().len())}
                </p>
                <FeatureShowcase items={mobile_features()} preview_chars={Some(DESCRIPTION_PREVIEW_CHARS)} />
            </section>

            <section class="privacy-band">
                <span class="pill"><i class="fas fa-lock"></i>{"Mobile Security"}</span>
                <h2>{"Privacy in Your Pocket"}</h2>
                <p class="muted">
                    {"The same privacy-first approach you love, now with mobile-specific security features like biometric locks and secure notifications."}
                </p>
                <div class="privacy-points">
                    {
                        SECURITY_POINTS.iter().map(|(icon, title, desc)| html! {
                            <div>
                                <i class={*icon}></i>
                                <h3 class="mono">{*title}</h3>
                                <p class="muted">{*desc}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="cta-band">
                <h2>{"Ready for Mobile Dating?"}</h2>
                <p class="muted">{"Join the waitlist to be first in line when our mobile apps launch on iOS and Android."}</p>
                <SignupForm
                    session={signup}
                    prompt="Enter your email for early access"
                    button_label="Join Mobile Waitlist"
                />
                <p class="muted mono small">{"We'll notify you the moment our mobile app is available"}</p>
            </section>

            <footer class="site-footer">
                <div class="footer-brand">
                    <i class="fas fa-mobile-screen brand-icon"></i>
                    <span class="brand">{"cat2gether mobile"}</span>
                    <span class="badge">{"Coming Soon"}</span>
                </div>
                <div class="footer-links">
                    <Link<Route> to={Route::Home} classes="mono">{"← Back to Main Site"}</Link<Route>>
                    <a href="https://github.com/cat2gether" target="_blank" rel="noopener noreferrer">
                        <i class="fab fa-github"></i>
                    </a>
                </div>
                <div class="footer-note mono">
                    <p>{"© 2025 cat2gether. Privacy-first mobile dating for geeks."}</p>
                    <p>{"Native iOS & Android apps coming soon"}</p>
                </div>
            </footer>
        </div>
    }
}
