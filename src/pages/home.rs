use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_open_chat: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top on initial mount
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
        <div class="home-page">
            <Hero on_open_chat={props.on_open_chat.clone()} />
            <UspSection />
            <WorkflowSection />
            <ServicesSection />
            <PricingSection />
            <BrandsSection />
            <CertificationsSection />
            <AreaSection />
            <FaqSection />
            <PaymentSection />
            <CtaSection on_open_chat={props.on_open_chat.clone()} />
            <Footer />
            <div class="mobile-bar-spacer"></div>
            <style>
                {PAGE_STYLE}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChatCtaProps {
    on_open_chat: Callback<()>,
}

#[function_component(Hero)]
fn hero(props: &ChatCtaProps) -> Html {
    let on_open_chat = props.on_open_chat.clone();
    let open_chat = Callback::from(move |_: MouseEvent| on_open_chat.emit(()));

    let badges = [
        "STEK Gecertificeerd",
        "F-gassen bevoegd",
        "24u reactie",
        "PIN betaling",
    ];

    html! {
        <section class="hero">
            <div class="hero-glow glow-one"></div>
            <div class="hero-glow glow-two"></div>
            <div class="hero-content">
                <div class="hero-badge">
                    <span class="badge-dot"></span>
                    {"Reactie binnen 24 uur"}
                </div>
                <h1>
                    {"Airconditioning &"}
                    <span class="hero-accent">{"Pompen Specialist"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"STEK-gecertificeerde monteurs voor installatie, reparatie en onderhoud. \
                      Eerlijke prijzen, vakkundige service in regio Rotterdam."}
                </p>
                <div class="hero-cta-group">
                    <button class="btn-primary hero-cta" onclick={open_chat}>
                        {"Plan een afspraak →"}
                    </button>
                    <a href="#diensten" class="btn-glass">{"Bekijk diensten"}</a>
                </div>
                <div class="hero-trust">
                    { for badges.iter().map(|badge| html! {
                        <span class="trust-badge">{"✓ "}{badge}</span>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(UspSection)]
fn usp_section() -> Html {
    let usps = [
        (
            "🎯",
            "Slimme Diagnose Vooraf",
            "Via onze chat verzamelen we informatie vóór het bezoek. Zo komt de monteur voorbereid en bespaart u op arbeidskosten.",
        ),
        (
            "🏆",
            "Gecertificeerde Vakmensen",
            "Al onze monteurs zijn STEK-gecertificeerd en bevoegd voor F-gassen. Uw installatie in deskundige handen.",
        ),
        (
            "💰",
            "Transparante Prijzen",
            "Geen verrassingen achteraf. U weet vooraf wat de kosten zijn. Betalen kan direct via PIN.",
        ),
        (
            "⚡",
            "Snelle Reactie",
            "Binnen 24 uur nemen wij contact op. Bij spoed streven we naar service dezelfde of volgende werkdag.",
        ),
    ];

    html! {
        <section class="usp-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Waarom "}<span class="gradient-text">{"UberAirco"}</span>{"?"}</h2>
                    <p>{"Wat ons anders maakt dan de rest"}</p>
                </div>
                <div class="usp-grid">
                    { for usps.iter().map(|(icon, title, description)| html! {
                        <div class="usp-card">
                            <div class="usp-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(WorkflowSection)]
fn workflow_section() -> Html {
    let steps = [
        (
            "01",
            "Start de Chat",
            "Beantwoord enkele vragen over uw situatie, type apparaat en locatie.",
            "24/7 beschikbaar",
        ),
        (
            "02",
            "Bevestiging & Planning",
            "Binnen 24 uur neemt onze planner telefonisch contact op om een afspraak in te plannen.",
            "Reactie binnen 24 uur",
        ),
        (
            "03",
            "Vakkundige Service",
            "De monteur arriveert volledig op de hoogte van uw situatie en met de juiste materialen.",
            "Voorbereid = goedkoper",
        ),
    ];

    html! {
        <section class="workflow-section" id="werkwijze">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Hoe werkt het?"}</h2>
                    <p>{"In 3 eenvoudige stappen geholpen"}</p>
                </div>
                <div class="workflow-steps">
                    { for steps.iter().map(|(number, title, description, benefit)| html! {
                        <div class="workflow-step">
                            <div class="step-number">{number}</div>
                            <div class="step-card">
                                <h3>{title}</h3>
                                <p>{description}</p>
                                <span class="step-benefit">{"✓ "}{benefit}</span>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    let services = [
        (
            "❄️",
            "Airconditioning",
            "Van installatie tot onderhoud en reparatie van alle merken airconditioners en warmtepompen.",
            [
                "Nieuwe installaties (split & multi-split)",
                "Koelmiddel bijvullen (R32, R410A)",
                "Storingen & reparaties",
                "Periodiek onderhoud",
                "Warmtepompen",
            ],
        ),
        (
            "💧",
            "Waterpompen",
            "Installatie, reparatie en onderhoud van bronpompen, regenwaterpompen en drukverhogingsinstallaties.",
            [
                "Bronpompen & putten",
                "Regenwateropvang systemen",
                "Drukverhogingssets",
                "Lekkage opsporen & repareren",
                "Pomp vervanging",
            ],
        ),
        (
            "📋",
            "Onderhoudscontracten",
            "Voorkom storingen met regelmatig onderhoud. Contractklanten krijgen voorrang bij spoedgevallen.",
            [
                "Jaarlijkse inspectie & reiniging",
                "Filtervervanging",
                "Prestatiecontrole",
                "Voorrangsstatus bij storingen",
                "10% korting op onderdelen",
            ],
        ),
        (
            "🔧",
            "Reparatie & Storing",
            "Airco blaast niet koud? Pomp slaat niet aan? Wij lossen het op, snel en vakkundig.",
            [
                "Diagnose ter plaatse",
                "Lekkage detectie",
                "Elektrische storingen",
                "Compressor problemen",
                "Advies vervanging vs. reparatie",
            ],
        ),
    ];

    html! {
        <section class="services-section" id="diensten">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Onze Diensten"}</h2>
                    <p>{"Complete service voor klimaat en waterhuishouding"}</p>
                </div>
                <div class="services-grid">
                    { for services.iter().map(|(icon, title, description, features)| html! {
                        <div class="service-card">
                            <div class="service-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                            <ul>
                                { for features.iter().map(|feature| html! {
                                    <li>{"✓ "}{feature}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(PricingSection)]
fn pricing_section() -> Html {
    let plans = [
        (
            "Voorrijkosten",
            "45",
            "eenmalig",
            "Inclusief eerste 30 minuten",
            [
                "Inclusief diagnose",
                "Binnen regio Rotterdam",
                "Vervalt bij opdracht >€200",
            ],
            false,
        ),
        (
            "Uurtarief",
            "55",
            "/ uur",
            "Arbeid na eerste 30 minuten",
            [
                "Per kwartier afgerekend",
                "Materialen apart",
                "Geen BTW-verrassingen",
            ],
            true,
        ),
        (
            "Onderhoudsbeurt",
            "95",
            "per beurt",
            "Complete airco-onderhoudsbeurt",
            [
                "Reiniging filters & unit",
                "Controle koelmiddel",
                "Prestatie-check",
            ],
            false,
        ),
    ];

    html! {
        <section class="pricing-section" id="tarieven">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Indicatieve Tarieven"}</h2>
                    <p>{"Transparante prijzen, geen verrassingen"}</p>
                </div>
                <div class="pricing-grid">
                    { for plans.iter().map(|(name, price, unit, description, features, featured)| html! {
                        <div class={classes!("pricing-card", featured.then_some("featured"))}>
                            { if *featured {
                                html! { <span class="pricing-flag">{"Populair"}</span> }
                            } else {
                                html! {}
                            } }
                            <h3>{name}</h3>
                            <div class="pricing-amount">
                                <span class="price">{"€"}{price}</span>
                                <span class="price-unit">{unit}</span>
                            </div>
                            <p class="pricing-description">{description}</p>
                            <ul>
                                { for features.iter().map(|feature| html! {
                                    <li>{"✓ "}{feature}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <p class="pricing-footnote">
                    {"* Prijzen zijn indicatief en inclusief BTW. Exacte offerte na intake."}
                </p>
            </div>
        </section>
    }
}

#[function_component(BrandsSection)]
fn brands_section() -> Html {
    let brands = [
        "Daikin", "Mitsubishi", "Samsung", "LG", "Toshiba", "Panasonic", "Fujitsu", "Grundfos",
        "DAB",
    ];

    html! {
        <section class="brands-section">
            <div class="section-inner">
                <p class="brands-intro">{"Wij werken met alle gangbare merken"}</p>
                <div class="brands-row">
                    { for brands.iter().map(|brand| html! {
                        <span class="brand-chip">{brand}</span>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CertificationsSection)]
fn certifications_section() -> Html {
    let certs = [
        ("🏅", "STEK Gecertificeerd", "Erkend koeltechnisch bedrijf"),
        ("🌿", "F-gassen Bevoegd", "EU 517/2014 compliant"),
        ("⚡", "NEN 1010", "Elektrische installaties"),
    ];

    html! {
        <section class="certs-section">
            <div class="section-inner">
                <div class="section-header light">
                    <h2>{"Certificeringen"}</h2>
                    <p>{"Erkend en gecertificeerd voor uw veiligheid"}</p>
                </div>
                <div class="certs-row">
                    { for certs.iter().map(|(icon, title, description)| html! {
                        <div class="cert-card">
                            <span class="cert-icon">{icon}</span>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(AreaSection)]
fn area_section() -> Html {
    let areas = [
        "Rotterdam",
        "Schiedam",
        "Vlaardingen",
        "Capelle a/d IJssel",
        "Krimpen a/d IJssel",
        "Ridderkerk",
        "Barendrecht",
        "Albrandswaard",
        "Hoogvliet",
        "Spijkenisse",
    ];

    html! {
        <section class="area-section" id="werkgebied">
            <div class="section-inner area-columns">
                <div class="area-text">
                    <h2>{"Werkgebied"}</h2>
                    <p>
                        {"UberAirco bedient Rotterdam en de directe omgeving binnen een straal van \
                          circa 15-20 kilometer. Dit stelt ons in staat om snel ter plaatse te zijn \
                          en efficiënt te werken."}
                    </p>
                    <p>
                        {"Twijfelt u of uw locatie binnen ons werkgebied valt? Start de chat en voer \
                          uw postcode in."}
                    </p>
                    <div class="area-chips">
                        { for areas.iter().map(|area| html! {
                            <span class="area-chip">{area}</span>
                        }) }
                    </div>
                </div>
                <div class="area-visual">
                    <span>{"📍"}</span>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section class="faq-section" id="faq">
            <div class="section-inner narrow">
                <div class="section-header">
                    <h2>{"Veelgestelde Vragen"}</h2>
                    <p>{"Snel antwoord op uw vragen"}</p>
                </div>

                <FaqItem question="Waarom werkt UberAirco met een chat in plaats van telefoon?">
                    <p>
                        {"Door vooraf de juiste informatie te verzamelen, kan onze monteur beter \
                          voorbereid komen. Dit betekent minder tijd kwijt aan uitzoeken ter plaatse, \
                          wat u arbeidskosten bespaart. Bovendien kunt u op elk moment van de dag een \
                          aanvraag indienen."}
                    </p>
                </FaqItem>

                <FaqItem question="Hoe snel kan een monteur langskomen?">
                    <p>
                        {"Na uw aanvraag neemt onze planner binnen 24 uur contact met u op. \
                          Afhankelijk van de drukte kunnen we vaak binnen 1-3 werkdagen een afspraak \
                          maken. Klanten met een onderhoudscontract krijgen voorrang bij spoedgevallen."}
                    </p>
                </FaqItem>

                <FaqItem question="Wat als het probleem ter plaatse anders blijkt?">
                    <p>
                        {"De monteur stelt altijd eerst een diagnose. Blijkt het probleem complexer of \
                          anders dan verwacht, dan bespreekt hij dit met u inclusief de bijbehorende \
                          kosten, vóórdat er verder gewerkt wordt. U houdt altijd de controle."}
                    </p>
                </FaqItem>

                <FaqItem question="Hoe kan ik betalen?">
                    <p>
                        {"Betaling vindt plaats direct na afronding van de werkzaamheden. U kunt \
                          pinnen bij de monteur. Voor grotere projecten of zakelijke klanten is \
                          betaling op factuur mogelijk in overleg."}
                    </p>
                </FaqItem>

                <FaqItem question="Plaatsen jullie ook nieuwe airconditioning?">
                    <p>
                        {"Ja, wij verzorgen complete installaties van airconditioners en warmtepompen. \
                          Na een intake ontvangt u een vrijblijvende offerte op maat. Wij werken met \
                          alle gangbare merken zoals Daikin, Mitsubishi en Samsung."}
                    </p>
                </FaqItem>

                <FaqItem question="Zijn jullie verzekerd?">
                    <p>
                        {"Ja, UberAirco is volledig verzekerd met een bedrijfs- en \
                          aansprakelijkheidsverzekering. U kunt met een gerust hart ons team in uw \
                          woning of bedrijfspand toelaten."}
                    </p>
                </FaqItem>
            </div>
        </section>
    }
}

#[function_component(PaymentSection)]
fn payment_section() -> Html {
    let methods = [
        ("💳", "PIN / Betaalpas"),
        ("📱", "Contactloos"),
        ("📄", "Factuur*"),
    ];

    html! {
        <section class="payment-section">
            <div class="section-inner">
                <h3 class="payment-title">{"Betaalmogelijkheden"}</h3>
                <div class="payment-row">
                    { for methods.iter().map(|(icon, name)| html! {
                        <div class="payment-tile">
                            <span class="payment-icon">{icon}</span>
                            <span>{name}</span>
                        </div>
                    }) }
                </div>
                <p class="payment-footnote">
                    {"* Betaling op factuur mogelijk voor zakelijke klanten en projecten boven €500"}
                </p>
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section(props: &ChatCtaProps) -> Html {
    let on_open_chat = props.on_open_chat.clone();
    let open_chat = Callback::from(move |_: MouseEvent| on_open_chat.emit(()));

    html! {
        <section class="cta-section">
            <div class="section-inner">
                <h2>{"Klaar om te starten?"}</h2>
                <p>
                    {"Plan direct een afspraak via onze chat. Wij nemen binnen 24 uur contact met \
                      u op."}
                </p>
                <button class="cta-button" onclick={open_chat}>{"Plan nu een afspraak"}</button>
                <p class="cta-guarantee">{"⚡ Reactie binnen 24 uur gegarandeerd"}</p>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let nav_items = [
        ("Diensten", "#diensten"),
        ("Tarieven", "#tarieven"),
        ("Werkgebied", "#werkgebied"),
        ("FAQ", "#faq"),
    ];

    html! {
        <footer class="site-footer">
            <div class="section-inner footer-columns">
                <div>
                    <h3 class="footer-brand">{"UBERAIRCO"}</h3>
                    <p class="footer-tagline">{"Airco & Pomp Specialist — Rotterdam"}</p>
                    <p class="footer-muted">{"📍 Werkgebied: Rotterdam en omgeving (15 km)"}</p>
                    <p class="footer-muted">{"🕐 Ma-Vr: 08:00 - 18:00 | Za: 09:00 - 14:00"}</p>
                </div>
                <div>
                    <h4>{"Navigatie"}</h4>
                    <nav class="footer-nav">
                        { for nav_items.iter().map(|(label, href)| html! {
                            <a href={*href}>{label}</a>
                        }) }
                    </nav>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <p class="footer-muted">{"💬 Start een chat voor afspraken"}</p>
                    <p class="footer-muted">{"📧 info@uberairco.nl"}</p>
                </div>
            </div>
            <div class="section-inner footer-legal">
                <p>{"© 2025 UberAirco. Alle rechten voorbehouden. | Algemene Voorwaarden | Privacy"}</p>
                <p>{"KvK: 87654321 | BTW: NL862456789B01"}</p>
            </div>
        </footer>
    }
}

const PAGE_STYLE: &str = r#"
.home-page {
    color: #1f2933;
}

.section-inner {
    max-width: 1160px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section-inner.narrow {
    max-width: 760px;
}

.section-header {
    text-align: center;
    margin-bottom: 3.5rem;
}

.section-header h2 {
    font-family: 'Sora', sans-serif;
    font-size: 2.2rem;
    margin: 0 0 0.75rem;
    color: #111827;
}

.section-header p {
    color: #6b7280;
    font-size: 1.1rem;
    margin: 0;
}

.section-header.light h2 {
    color: #fff;
}

.section-header.light p {
    color: rgba(255, 255, 255, 0.7);
}

.gradient-text {
    background: linear-gradient(90deg, #1565c0, #42a5f5);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

/* Hero */

.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    background: linear-gradient(135deg, #0d47a1 0%, #1565c0 50%, #1e88e5 100%);
}

.hero-glow {
    position: absolute;
    border-radius: 50%;
    filter: blur(60px);
    animation: float 8s ease-in-out infinite;
}

.glow-one {
    top: 5rem;
    left: 2.5rem;
    width: 140px;
    height: 140px;
    background: rgba(255, 255, 255, 0.12);
}

.glow-two {
    bottom: 8rem;
    right: 4rem;
    width: 220px;
    height: 220px;
    background: rgba(249, 115, 22, 0.25);
    animation-delay: 2s;
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-20px); }
}

.hero-content {
    position: relative;
    z-index: 2;
    max-width: 1160px;
    margin: 0 auto;
    padding: 8rem 1.5rem 6rem;
    animation: rise 0.7s ease-out both;
}

@keyframes rise {
    from { opacity: 0; transform: translateY(40px); }
    to { opacity: 1; transform: translateY(0); }
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: #fff;
    font-size: 0.9rem;
    margin-bottom: 1.5rem;
    backdrop-filter: blur(6px);
}

.badge-dot {
    width: 8px;
    height: 8px;
    background: #4ade80;
    border-radius: 50%;
    animation: chat-pulse 2s infinite;
}

@keyframes chat-pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.4; }
}

.hero h1 {
    font-family: 'Sora', sans-serif;
    font-size: clamp(2.5rem, 6vw, 4.5rem);
    line-height: 1.1;
    color: #fff;
    margin: 0 0 1.5rem;
    max-width: 48rem;
}

.hero-accent {
    display: block;
    color: #fb923c;
}

.hero-subtitle {
    color: rgba(255, 255, 255, 0.8);
    font-size: 1.2rem;
    max-width: 36rem;
    margin: 0 0 2rem;
}

.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 2.5rem;
}

.btn-primary {
    background: linear-gradient(90deg, #f97316, #ea580c);
    color: #fff;
    border: none;
    border-radius: 12px;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.3s ease, box-shadow 0.3s ease;
    box-shadow: 0 12px 24px rgba(249, 115, 22, 0.3);
}

.btn-primary:hover {
    transform: translateY(-2px);
    box-shadow: 0 16px 32px rgba(249, 115, 22, 0.4);
}

.btn-glass {
    display: inline-flex;
    align-items: center;
    padding: 1rem 2rem;
    border-radius: 12px;
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.25);
    color: #fff;
    font-weight: 500;
    text-decoration: none;
    backdrop-filter: blur(6px);
    transition: background 0.3s ease;
}

.btn-glass:hover {
    background: rgba(255, 255, 255, 0.2);
}

.hero-trust {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.trust-badge {
    padding: 0.4rem 0.9rem;
    border-radius: 8px;
    background: rgba(255, 255, 255, 0.1);
    color: rgba(255, 255, 255, 0.9);
    font-size: 0.9rem;
    backdrop-filter: blur(6px);
}

/* USP */

.usp-section {
    padding: 6rem 0;
    background: #fff;
}

.usp-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
    gap: 1.5rem;
}

.usp-card {
    padding: 1.75rem;
    border-radius: 16px;
    background: #f7f8fa;
    transition: transform 0.4s ease, box-shadow 0.4s ease;
}

.usp-card:hover {
    transform: translateY(-6px);
    box-shadow: 0 16px 32px rgba(13, 71, 161, 0.12);
}

.usp-icon {
    font-size: 1.8rem;
    width: 56px;
    height: 56px;
    border-radius: 14px;
    background: #e3f2fd;
    display: flex;
    align-items: center;
    justify-content: center;
    margin-bottom: 1rem;
}

.usp-card h3 {
    font-family: 'Sora', sans-serif;
    font-size: 1.1rem;
    margin: 0 0 0.5rem;
}

.usp-card p {
    color: #6b7280;
    font-size: 0.95rem;
    margin: 0;
}

/* Workflow */

.workflow-section {
    padding: 6rem 0;
    background: #f7f8fa;
}

.workflow-steps {
    max-width: 720px;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.workflow-step {
    display: flex;
    gap: 1.5rem;
    align-items: flex-start;
}

.step-number {
    flex-shrink: 0;
    width: 56px;
    height: 56px;
    border-radius: 50%;
    background: linear-gradient(135deg, #1565c0, #0d47a1);
    color: #fff;
    font-family: 'Sora', sans-serif;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
    box-shadow: 0 8px 16px rgba(21, 101, 192, 0.3);
}

.step-card {
    flex: 1;
    background: #fff;
    border-radius: 16px;
    padding: 1.5rem;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.06);
}

.step-card h3 {
    font-family: 'Sora', sans-serif;
    margin: 0 0 0.5rem;
}

.step-card p {
    color: #6b7280;
    margin: 0 0 1rem;
}

.step-benefit {
    display: inline-block;
    padding: 0.3rem 0.8rem;
    border-radius: 999px;
    background: #dcfce7;
    color: #15803d;
    font-size: 0.85rem;
    font-weight: 500;
}

/* Services */

.services-section {
    padding: 6rem 0;
    background: #fff;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: 1.5rem;
}

.service-card {
    padding: 2rem;
    border-radius: 16px;
    border: 1px solid #eceff3;
    background: #fff;
    transition: transform 0.4s ease, box-shadow 0.4s ease, border-color 0.4s ease;
}

.service-card:hover {
    transform: translateY(-6px);
    border-color: #bbdefb;
    box-shadow: 0 20px 40px rgba(13, 71, 161, 0.08);
}

.service-icon {
    width: 64px;
    height: 64px;
    border-radius: 16px;
    background: linear-gradient(135deg, #1565c0, #0d47a1);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.8rem;
    margin-bottom: 1.25rem;
}

.service-card h3 {
    font-family: 'Sora', sans-serif;
    font-size: 1.25rem;
    margin: 0 0 0.75rem;
}

.service-card > p {
    color: #6b7280;
    margin: 0 0 1.25rem;
}

.service-card ul {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.service-card li {
    color: #4b5563;
    font-size: 0.92rem;
}

/* Pricing */

.pricing-section {
    padding: 6rem 0;
    background: #f7f8fa;
}

.pricing-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.5rem;
    max-width: 980px;
    margin: 0 auto;
}

.pricing-card {
    position: relative;
    padding: 2rem;
    border-radius: 16px;
    background: #fff;
    border: 1px solid #eceff3;
    transition: transform 0.4s ease;
}

.pricing-card:hover {
    transform: translateY(-6px);
}

.pricing-card.featured {
    background: linear-gradient(135deg, #1565c0, #0d47a1);
    color: #fff;
    border: none;
    box-shadow: 0 20px 40px rgba(21, 101, 192, 0.35);
}

.pricing-flag {
    position: absolute;
    top: -12px;
    left: 50%;
    transform: translateX(-50%);
    background: #f97316;
    color: #fff;
    font-size: 0.85rem;
    font-weight: 600;
    padding: 0.25rem 1rem;
    border-radius: 999px;
}

.pricing-card h3 {
    font-family: 'Sora', sans-serif;
    margin: 0 0 0.75rem;
}

.pricing-amount {
    display: flex;
    align-items: baseline;
    gap: 0.3rem;
    margin-bottom: 0.5rem;
}

.price {
    font-family: 'Sora', sans-serif;
    font-size: 2.5rem;
    font-weight: 700;
    color: #1565c0;
}

.pricing-card.featured .price {
    color: #fff;
}

.price-unit {
    color: #6b7280;
}

.pricing-card.featured .price-unit,
.pricing-card.featured .pricing-description {
    color: rgba(255, 255, 255, 0.75);
}

.pricing-description {
    color: #6b7280;
    font-size: 0.9rem;
    margin: 0 0 1.5rem;
}

.pricing-card ul {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.6rem;
    font-size: 0.92rem;
}

.pricing-footnote {
    text-align: center;
    color: #9ca3af;
    font-size: 0.85rem;
    margin-top: 2rem;
}

/* Brands */

.brands-section {
    padding: 4rem 0;
    background: #fff;
    border-top: 1px solid #eceff3;
    border-bottom: 1px solid #eceff3;
}

.brands-intro {
    text-align: center;
    color: #9ca3af;
    font-size: 0.9rem;
    margin: 0 0 2rem;
}

.brands-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
}

.brand-chip {
    padding: 0.75rem 1.5rem;
    border-radius: 12px;
    background: #f7f8fa;
    color: #374151;
    font-weight: 600;
    transition: background 0.3s ease, color 0.3s ease;
}

.brand-chip:hover {
    background: #e3f2fd;
    color: #1565c0;
}

/* Certifications */

.certs-section {
    padding: 6rem 0;
    background: linear-gradient(135deg, #0d47a1, #1565c0);
    color: #fff;
}

.certs-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
}

.cert-card {
    min-width: 220px;
    padding: 2rem;
    border-radius: 16px;
    background: rgba(255, 255, 255, 0.08);
    border: 1px solid rgba(255, 255, 255, 0.15);
    text-align: center;
    backdrop-filter: blur(6px);
}

.cert-icon {
    font-size: 2.8rem;
    display: block;
    margin-bottom: 1rem;
}

.cert-card h3 {
    font-family: 'Sora', sans-serif;
    font-size: 1.05rem;
    margin: 0 0 0.25rem;
}

.cert-card p {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.9rem;
    margin: 0;
}

/* Area */

.area-section {
    padding: 6rem 0;
    background: #fff;
}

.area-columns {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}

@media (min-width: 960px) {
    .area-columns {
        grid-template-columns: 1fr 1fr;
    }
}

.area-text h2 {
    font-family: 'Sora', sans-serif;
    font-size: 2.2rem;
    margin: 0 0 1rem;
}

.area-text p {
    color: #6b7280;
    margin: 0 0 1.5rem;
}

.area-chips {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.area-chip {
    padding: 0.5rem 1rem;
    border-radius: 999px;
    background: #f3f4f6;
    color: #374151;
    font-size: 0.9rem;
    font-weight: 500;
    transition: background 0.3s ease, color 0.3s ease;
}

.area-chip:hover {
    background: #e3f2fd;
    color: #1565c0;
}

.area-visual {
    height: 320px;
    border-radius: 16px;
    background: linear-gradient(135deg, #bbdefb, #90caf9);
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 5rem;
    opacity: 0.85;
}

/* FAQ */

.faq-section {
    padding: 6rem 0;
    background: #f7f8fa;
}

.faq-item {
    background: #fff;
    border: 1px solid #eceff3;
    border-radius: 16px;
    margin-bottom: 1rem;
    overflow: hidden;
}

.faq-question {
    width: 100%;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding: 1.25rem 1.5rem;
    background: none;
    border: none;
    text-align: left;
    font-size: 1rem;
    font-weight: 600;
    color: #111827;
    cursor: pointer;
}

.faq-question:hover {
    background: #f9fafb;
}

.toggle-icon {
    color: #1565c0;
    font-size: 1.2rem;
}

.faq-answer {
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.3s ease;
}

.faq-item.open .faq-answer {
    max-height: 24rem;
}

.faq-answer p {
    padding: 0 1.5rem 1.25rem;
    margin: 0;
    color: #6b7280;
}

/* Payment */

.payment-section {
    padding: 4rem 0;
    background: #fff;
    text-align: center;
}

.payment-title {
    font-family: 'Sora', sans-serif;
    font-size: 1.25rem;
    margin: 0 0 1.5rem;
}

.payment-row {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
    margin-bottom: 1rem;
}

.payment-tile {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 1.5rem;
    border-radius: 12px;
    background: #f7f8fa;
    font-size: 0.9rem;
    font-weight: 500;
    color: #374151;
}

.payment-icon {
    font-size: 1.5rem;
}

.payment-footnote {
    color: #9ca3af;
    font-size: 0.85rem;
    margin: 0;
}

/* CTA */

.cta-section {
    padding: 6rem 0;
    background: linear-gradient(135deg, #f97316, #ea580c);
    color: #fff;
    text-align: center;
}

.cta-section h2 {
    font-family: 'Sora', sans-serif;
    font-size: clamp(2rem, 5vw, 3rem);
    margin: 0 0 1.25rem;
}

.cta-section p {
    font-size: 1.2rem;
    color: rgba(255, 255, 255, 0.9);
    max-width: 36rem;
    margin: 0 auto 2rem;
}

.cta-button {
    background: #fff;
    color: #ea580c;
    border: none;
    border-radius: 12px;
    padding: 1rem 2rem;
    font-size: 1.1rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.3s ease;
    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.15);
}

.cta-button:hover {
    transform: scale(1.05);
}

.cta-guarantee {
    margin-top: 2rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.85);
}

/* Footer */

.site-footer {
    background: #0b2a52;
    color: #fff;
    padding: 4rem 0 2rem;
}

.footer-columns {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 3rem;
    margin-bottom: 3rem;
}

.footer-brand {
    font-family: 'Sora', sans-serif;
    font-size: 1.5rem;
    margin: 0 0 0.25rem;
}

.footer-tagline {
    color: #fb923c;
    font-size: 0.9rem;
    margin: 0 0 1rem;
}

.footer-muted {
    color: rgba(255, 255, 255, 0.6);
    font-size: 0.9rem;
    margin: 0 0 0.5rem;
}

.site-footer h4 {
    margin: 0 0 1rem;
}

.footer-nav {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.footer-nav a {
    color: rgba(255, 255, 255, 0.6);
    text-decoration: none;
    font-size: 0.9rem;
    transition: color 0.3s ease;
}

.footer-nav a:hover {
    color: #fff;
}

.footer-legal {
    border-top: 1px solid rgba(255, 255, 255, 0.1);
    padding-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    justify-content: space-between;
    gap: 1rem;
}

.footer-legal p {
    color: rgba(255, 255, 255, 0.4);
    font-size: 0.85rem;
    margin: 0;
}

/* Mobile */

.mobile-bar-spacer {
    display: none;
}

@media (max-width: 767px) {
    .mobile-bar-spacer {
        display: block;
        height: 4rem;
    }
}
"#;
