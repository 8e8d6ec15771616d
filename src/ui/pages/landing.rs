//! Landing page component
//!
//! The Diix Academy single-page site:
//! - SEO meta tags
//! - Hero section over the animated particle field
//! - Course catalogue
//! - Testimonials carousel
//! - About section with mission cards and stats
//! - Contact form
//! - Support channels and FAQ accordion
//! - Footer
//!
//! The header buttons open the auth modal in login or signup mode.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::wizard::ModeKind;
use crate::ui::auth::AuthModal;
use crate::ui::contact::ContactSection;
use crate::ui::icon::{Icon, icons};
use crate::ui::particles::ParticlesBackground;
use crate::ui::testimonials::TestimonialsSection;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Início", "#inicio"),
    ("Produtos", "#produtos"),
    ("Sobre", "#sobre"),
    ("Contato", "#contato"),
    ("Suporte", "#suporte"),
];

struct Course {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    students: &'static str,
    rating: f32,
    price: &'static str,
    featured: bool,
}

static COURSES: &[Course] = &[
    Course {
        icon: icons::COMPASS,
        title: "Desenvolvimento Web",
        description: "Domine as tecnologias mais demandadas do mercado. React, Node.js, TypeScript e muito mais.",
        duration: "120 horas",
        students: "2.5K",
        rating: 4.9,
        price: "R$ 997",
        featured: true,
    },
    Course {
        icon: icons::SPARKLES,
        title: "Design UI/UX",
        description: "Crie interfaces memoráveis. Figma, princípios de design, prototipagem e pesquisa.",
        duration: "80 horas",
        students: "1.8K",
        rating: 4.8,
        price: "R$ 797",
        featured: false,
    },
    Course {
        icon: icons::ARROW_UP,
        title: "Marketing Digital",
        description: "Estratégias avançadas de growth. SEO, Ads, Analytics e automação de marketing.",
        duration: "60 horas",
        students: "3.2K",
        rating: 4.9,
        price: "R$ 697",
        featured: false,
    },
    Course {
        icon: icons::BOOK,
        title: "Business & Gestão",
        description: "Liderança, estratégia e gestão de projetos para profissionais em ascensão.",
        duration: "50 horas",
        students: "1.5K",
        rating: 4.7,
        price: "R$ 597",
        featured: false,
    },
];

const FAQS: &[(&str, &str)] = &[
    (
        "Como faço para acessar meus cursos?",
        "Após a compra, você receberá um email com suas credenciais de acesso. Basta fazer login na plataforma e todos os seus cursos estarão disponíveis na área do aluno.",
    ),
    (
        "Qual é a política de reembolso?",
        "Oferecemos garantia de 7 dias. Se você não estiver satisfeito com o conteúdo, pode solicitar o reembolso integral sem questionamentos.",
    ),
    (
        "Os cursos têm certificado?",
        "Sim! Todos os cursos oferecem certificado de conclusão digital que pode ser compartilhado no LinkedIn e incluído no seu currículo.",
    ),
    (
        "Posso acessar os cursos pelo celular?",
        "Absolutamente! Nossa plataforma é 100% responsiva e também oferecemos um aplicativo dedicado para iOS e Android.",
    ),
    (
        "Por quanto tempo tenho acesso ao conteúdo?",
        "Você terá acesso vitalício a todos os cursos adquiridos, incluindo futuras atualizações de conteúdo.",
    ),
];

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let auth_open = RwSignal::new(false);
    let auth_mode = RwSignal::new(ModeKind::Login);

    let open_auth = Callback::new(move |kind: ModeKind| {
        auth_mode.set(kind);
        auth_open.set(true);
    });
    let close_auth = Callback::new(move |_| auth_open.set(false));

    view! {
        <SeoMeta />
        <LandingStyles />

        <div class="min-h-screen bg-background text-foreground overflow-x-hidden">
            <Header on_auth=open_auth />

            <main>
                <HeroSection />
                <ProductsSection on_enroll=open_auth />
                <TestimonialsSection />
                <AboutSection />
                <ContactSection />
                <SupportSection />
            </main>

            <Footer />
        </div>

        <AuthModal is_open=auth_open initial_mode=auth_mode on_close=close_auth />
        <ScrollAnimationScript />
    }
}

/// Header component with mobile menu support
#[component]
fn Header(on_auth: Callback<ModeKind>) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-background/80 backdrop-blur-md border-b border-primary/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#inicio" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold">"Diix " <span class="text-primary">"Academy"</span></span>
                    </a>

                    // Desktop navigation
                    <div class="hidden md:flex items-center gap-8">
                        <nav class="flex items-center gap-6">
                            {NAV_LINKS.iter().map(|(label, href)| view! {
                                <a href=*href class="nav-link">{*label}</a>
                            }).collect_view()}
                        </nav>
                        <div class="flex items-center gap-3">
                            <button class="btn-ghost" on:click=move |_| on_auth.run(ModeKind::Login)>
                                "Entrar"
                            </button>
                            <button class="btn-primary" on:click=move |_| on_auth.run(ModeKind::Signup)>
                                "Cadastrar"
                            </button>
                        </div>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-primary/10 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Abrir menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-primary/10">
                        {NAV_LINKS.iter().map(|(label, href)| view! {
                            <a
                                href=*href
                                class="block px-4 py-2 nav-link rounded-lg hover:bg-primary/10"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <div class="flex gap-3 px-4 pt-2">
                            <button
                                class="btn-ghost flex-1"
                                on:click=move |_| {
                                    set_mobile_menu_open.set(false);
                                    on_auth.run(ModeKind::Login);
                                }
                            >
                                "Entrar"
                            </button>
                            <button
                                class="btn-primary flex-1"
                                on:click=move |_| {
                                    set_mobile_menu_open.set(false);
                                    on_auth.run(ModeKind::Signup);
                                }
                            >
                                "Cadastrar"
                            </button>
                        </div>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="inicio" class="min-h-screen flex items-center justify-center relative overflow-hidden pt-16">
            <ParticlesBackground />

            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-primary/10 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl"></div>
            </div>

            <div class="relative z-10 text-center px-4 max-w-5xl mx-auto">
                <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full glass-card mb-8 landing-fade-in-up">
                    <Icon name=icons::SPARKLES class="w-4 h-4" />
                    <span class="text-sm text-primary font-medium">"Plataforma de Ensino Premium"</span>
                </div>

                <h1 class="text-5xl md:text-7xl lg:text-8xl font-bold mb-6 landing-fade-in-up landing-delay-200">
                    "Domine o"
                    <br />
                    <span class="text-primary glow-text">"Conhecimento"</span>
                </h1>

                <p class="text-xl md:text-2xl text-muted max-w-2xl mx-auto mb-10 landing-fade-in-up landing-delay-200">
                    "Uma jornada épica de aprendizado. Cursos exclusivos, mentoria especializada e uma comunidade de elite."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                    <a href="#produtos" class="landing-btn-primary">
                        "Explorar Cursos"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </a>
                    <a href="#sobre" class="landing-btn-secondary">
                        "Conheça a Academia"
                    </a>
                </div>

                <dl class="grid grid-cols-3 gap-8 mt-20 landing-fade-in-up landing-delay-400">
                    <Stat value="10K+" label="Alunos Ativos" />
                    <Stat value="200+" label="Cursos Premium" />
                    <Stat value="98%" label="Satisfação" />
                </dl>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce z-10">
                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="text-center">
            <dt class="text-sm text-muted order-2">{label}</dt>
            <dd class="text-3xl md:text-4xl font-bold text-primary glow-text">{value}</dd>
        </div>
    }
}

#[component]
fn ProductsSection(on_enroll: Callback<ModeKind>) -> impl IntoView {
    view! {
        <section id="produtos" class="py-32 px-4 relative overflow-hidden">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="section-title">
                        "Nossos " <span class="text-primary glow-text">"Cursos"</span>
                    </h2>
                    <p class="section-subtitle">
                        "Cursos desenvolvidos por especialistas da indústria para transformar sua carreira"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {COURSES.iter().map(|course| view! { <CourseCard course=course on_enroll=on_enroll /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CourseCard(course: &'static Course, on_enroll: Callback<ModeKind>) -> impl IntoView {
    let card_class = if course.featured {
        "landing-scroll-animate glass-card relative rounded-2xl p-6 ring-2 ring-primary/50 transition-transform duration-500 hover:scale-105"
    } else {
        "landing-scroll-animate glass-card relative rounded-2xl p-6 transition-transform duration-500 hover:scale-105"
    };

    view! {
        <article class=card_class>
            {course.featured.then(|| view! {
                <div class="absolute -top-3 left-1/2 -translate-x-1/2 px-3 py-1 bg-primary text-background text-xs font-semibold rounded-full">
                    "Destaque"
                </div>
            })}

            <div class="w-14 h-14 rounded-xl bg-primary/10 flex items-center justify-center mb-6">
                <Icon name=course.icon class="w-7 h-7" />
            </div>
            <h3 class="text-xl font-bold mb-3">{course.title}</h3>
            <p class="text-muted text-sm mb-6 leading-relaxed">{course.description}</p>

            <div class="flex items-center gap-4 text-sm text-muted mb-6">
                <span class="flex items-center gap-1">
                    <Icon name=icons::CLOCK class="w-4 h-4" />
                    {course.duration}
                </span>
                <span class="flex items-center gap-1">
                    <Icon name=icons::USERS class="w-4 h-4" />
                    {course.students}
                </span>
                <span class="flex items-center gap-1">
                    <Icon name=icons::STAR class="w-4 h-4" />
                    {format!("{:.1}", course.rating)}
                </span>
            </div>

            <div class="flex items-center justify-between pt-4 border-t border-primary/10">
                <span class="text-2xl font-bold text-primary">{course.price}</span>
                <button class="btn-primary" on:click=move |_| on_enroll.run(ModeKind::Signup)>
                    "Matricular"
                </button>
            </div>
        </article>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="sobre" class="py-32 px-4 relative overflow-hidden">
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-16 items-center">
                <div class="landing-scroll-animate">
                    <h2 class="section-title text-left">
                        "Sobre a " <span class="text-primary glow-text">"Diix Academy"</span>
                    </h2>
                    <p class="text-lg text-muted mb-6 leading-relaxed">
                        "Nascemos com o propósito de transformar a educação digital. Combinamos conteúdo de excelência com uma experiência de aprendizado imersiva."
                    </p>
                    <p class="text-lg text-muted mb-8 leading-relaxed">
                        "Cada curso é desenvolvido por profissionais que vivem o mercado, garantindo que você aprenda o que realmente importa."
                    </p>

                    <dl class="grid grid-cols-2 gap-4">
                        <AboutStat value="5+" label="Anos de Experiência" />
                        <AboutStat value="50+" label="Instrutores Especialistas" />
                        <AboutStat value="95%" label="Taxa de Conclusão" />
                        <AboutStat value="24/7" label="Suporte Disponível" />
                    </dl>
                </div>

                <div class="grid sm:grid-cols-2 gap-6">
                    <FeatureCard
                        icon=icons::COMPASS
                        title="Missão"
                        description="Democratizar o acesso ao conhecimento de alta qualidade, transformando vidas através da educação digital."
                    />
                    <FeatureCard
                        icon=icons::USERS
                        title="Comunidade"
                        description="Uma rede exclusiva de profissionais e mentores prontos para apoiar sua jornada de crescimento."
                    />
                    <FeatureCard
                        icon=icons::GRADUATION
                        title="Excelência"
                        description="Conteúdo criado pelos melhores especialistas do mercado, com metodologia comprovada."
                    />
                    <FeatureCard
                        icon=icons::SPARKLES
                        title="Inovação"
                        description="Tecnologia de ponta para uma experiência de aprendizado imersiva e personalizada."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutStat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="glass-card rounded-xl p-4">
            <dd class="text-3xl font-bold text-primary glow-text">{value}</dd>
            <dt class="text-sm text-muted">{label}</dt>
        </div>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate glass-card p-6 rounded-xl transition-all duration-300 hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <p class="text-muted text-sm leading-relaxed">{description}</p>
        </div>
    }
}

#[component]
fn SupportSection() -> impl IntoView {
    view! {
        <section id="suporte" class="py-32 px-4 relative overflow-hidden">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="section-title">
                        "Central de " <span class="text-primary glow-text">"Suporte"</span>
                    </h2>
                    <p class="section-subtitle">
                        "Estamos aqui para ajudar você em cada etapa da sua jornada"
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-6 mb-16">
                    <SupportChannel
                        icon=icons::MESSAGE
                        title="Chat ao Vivo"
                        description="Converse com nossa equipe em tempo real"
                        action="Iniciar Chat"
                    />
                    <SupportChannel
                        icon=icons::FILE_TEXT
                        title="Central de Ajuda"
                        description="Artigos e tutoriais detalhados"
                        action="Acessar"
                    />
                    <SupportChannel
                        icon=icons::VIDEO
                        title="Tutoriais em Vídeo"
                        description="Aprenda passo a passo em vídeo"
                        action="Assistir"
                    />
                </div>

                <div class="max-w-3xl mx-auto">
                    <h3 class="text-2xl font-bold text-center mb-8 flex items-center justify-center gap-2">
                        <Icon name=icons::HELP class="w-6 h-6" />
                        "Perguntas Frequentes"
                    </h3>
                    <div class="space-y-4">
                        {FAQS.iter().map(|(question, answer)| view! {
                            <FaqItem question=*question answer=*answer />
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SupportChannel(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    action: &'static str,
) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate glass-card rounded-2xl p-6 text-center">
            <div class="w-14 h-14 mx-auto rounded-xl bg-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-7 h-7" />
            </div>
            <h4 class="text-lg font-semibold mb-2">{title}</h4>
            <p class="text-sm text-muted mb-4">{description}</p>
            <a href="#contato" class="link-primary text-sm font-medium">{action}</a>
        </div>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="landing-scroll-animate glass-card rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-primary/5 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get()
            >
                <span class="font-semibold">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300 max-h-0"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-muted leading-relaxed">
                    {answer}
                </div>
            </div>
        </div>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-cyan-400 to-purple-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <Icon name=icons::GRADUATION class="w-6 h-6" />
        </div>
    }
}

#[component]
fn FooterColumn(title: &'static str, links: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold mb-4">{title}</h4>
            <ul class="space-y-2">
                {links.iter().map(|(name, href)| view! {
                    <li>
                        <a href=*href class="text-sm text-muted hover:text-primary transition-colors">{*name}</a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    const PLATFORM: &[(&str, &str)] = &[
        ("Cursos", "#produtos"),
        ("Planos", "#"),
        ("Para Empresas", "#"),
        ("Certificados", "#"),
    ];
    const SUPPORT: &[(&str, &str)] = &[
        ("Central de Ajuda", "#suporte"),
        ("FAQ", "#suporte"),
        ("Comunidade", "#"),
        ("Contato", "#contato"),
    ];
    const COMPANY: &[(&str, &str)] = &[
        ("Sobre Nós", "#sobre"),
        ("Carreiras", "#"),
        ("Blog", "#"),
        ("Imprensa", "#"),
    ];
    const LEGAL: &[(&str, &str)] = &[
        ("Termos de Uso", "#"),
        ("Privacidade", "#"),
        ("Cookies", "#"),
        ("Licenças", "#"),
    ];

    view! {
        <footer class="py-16 border-t border-primary/10">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-2 md:grid-cols-6 gap-8 mb-12">
                    <div class="col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold">"Diix " <span class="text-primary">"Academy"</span></span>
                        </div>
                        <p class="text-sm text-muted max-w-xs">
                            "Transformando vidas através da educação de excelência. Junte-se a milhares de alunos em uma jornada de conhecimento."
                        </p>
                    </div>
                    <FooterColumn title="Plataforma" links=PLATFORM />
                    <FooterColumn title="Suporte" links=SUPPORT />
                    <FooterColumn title="Empresa" links=COMPANY />
                    <FooterColumn title="Legal" links=LEGAL />
                </div>

                <div class="pt-8 border-t border-primary/10 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-muted">
                        "© 2025 Diix Academy. Todos os direitos reservados."
                    </span>
                    <a href="#inicio" class="carousel-control" aria-label="Voltar ao topo">
                        <Icon name=icons::ARROW_UP class="w-5 h-5" />
                    </a>
                </div>
            </div>
        </footer>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Diix Academy - Plataforma de Ensino Premium" />
        <Meta name="description" content="Cursos exclusivos, mentoria especializada e uma comunidade de elite. Domine o conhecimento com a Diix Academy." />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="Diix Academy - Plataforma de Ensino Premium" />
        <Meta property="og:description" content="Uma jornada épica de aprendizado. Cursos exclusivos, mentoria especializada e uma comunidade de elite." />
    }
}

/// CSS for the landing sections, the modal wizard and the form controls
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            :root {
                --cyan: 185 100% 50%;
                --background: 222 47% 5%;
                --muted: 215 20% 65%;
            }
            .bg-background { background-color: hsl(var(--background)); }
            .text-foreground { color: #e5e7eb; }
            .text-primary { color: hsl(var(--cyan)); }
            .bg-primary { background-color: hsl(var(--cyan)); }
            .text-muted { color: hsl(var(--muted)); }
            .glow-text { text-shadow: 0 0 20px hsl(var(--cyan) / 0.6), 0 0 40px hsl(var(--cyan) / 0.3); }

            .glass-card {
                background: rgba(15, 23, 42, 0.6);
                border: 1px solid hsl(var(--cyan) / 0.15);
                backdrop-filter: blur(12px);
            }

            .section-title { font-size: 2.5rem; font-weight: 700; margin-bottom: 1rem; text-align: center; }
            .section-subtitle { font-size: 1.125rem; color: hsl(var(--muted)); max-width: 42rem; margin: 0 auto; }
            .section-tag { display: inline-block; font-size: 0.75rem; letter-spacing: 0.2em; color: hsl(var(--cyan)); margin-bottom: 0.75rem; }
            .nav-link { font-size: 0.875rem; font-weight: 500; color: hsl(var(--muted)); transition: color 0.2s; }
            .nav-link:hover { color: hsl(var(--cyan)); }
            .link-primary { color: hsl(var(--cyan)); font-weight: 500; }
            .link-primary:hover { text-decoration: underline; }
            .course-badge { font-size: 0.75rem; padding: 0.25rem 0.75rem; border-radius: 9999px; background: hsl(var(--cyan) / 0.1); color: hsl(var(--cyan)); }

            /* Button styles */
            .btn-primary, .landing-btn-primary {
                display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
                font-weight: 600; color: #020617; background-color: hsl(var(--cyan));
                border-radius: 0.75rem; transition: all 0.3s; cursor: pointer;
            }
            .btn-primary { padding: 0.6rem 1.25rem; }
            .landing-btn-primary { padding: 1rem 2rem; font-size: 1.125rem; box-shadow: 0 0 30px hsl(var(--cyan) / 0.35); }
            .btn-primary:hover, .landing-btn-primary:hover { transform: scale(1.03); box-shadow: 0 0 40px hsl(var(--cyan) / 0.45); }
            .btn-primary:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }
            .btn-secondary, .btn-ghost, .landing-btn-secondary {
                display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
                font-weight: 600; color: hsl(var(--cyan)); border-radius: 0.75rem; transition: all 0.3s; cursor: pointer;
            }
            .btn-secondary, .landing-btn-secondary { border: 2px solid hsl(var(--cyan) / 0.5); }
            .btn-secondary, .btn-ghost { padding: 0.6rem 1.25rem; }
            .landing-btn-secondary { padding: 1rem 2rem; font-size: 1.125rem; }
            .btn-secondary:hover, .btn-ghost:hover, .landing-btn-secondary:hover { background: hsl(var(--cyan) / 0.1); }
            .btn-icon { padding: 0.5rem; border-radius: 0.5rem; }
            .btn-icon:hover { background: hsl(var(--cyan) / 0.1); }

            /* Modal and form controls */
            .modal-backdrop { background: rgba(2, 6, 23, 0.8); backdrop-filter: blur(6px); }
            .card { background: #0b1220; border: 1px solid hsl(var(--cyan) / 0.2); border-radius: 1rem; }
            .card-header { display: flex; justify-content: space-between; align-items: flex-start; padding: 1.5rem 1.5rem 0; }
            .title-lg { font-size: 1.5rem; font-weight: 700; }
            .subtitle { font-size: 0.875rem; color: hsl(var(--muted)); margin-top: 0.25rem; }
            .label { display: block; font-size: 0.875rem; font-weight: 500; }
            .input-base, .select-base {
                width: 100%; padding: 0.6rem 0.9rem; border-radius: 0.6rem;
                background: rgba(15, 23, 42, 0.8); border: 1px solid hsl(var(--cyan) / 0.2); color: #e5e7eb;
            }
            .input-base:focus, .select-base:focus { outline: none; border-color: hsl(var(--cyan)); box-shadow: 0 0 0 3px hsl(var(--cyan) / 0.2); }
            .input-base:disabled, .select-base:disabled { opacity: 0.6; }
            .text-theme-error { color: #f87171; }
            .icon-text { width: 1rem; height: 1rem; }
            .icon-standalone { width: 1.25rem; height: 1.25rem; }
            .choice-chip {
                display: flex; align-items: center; justify-content: center; padding: 0.5rem; cursor: pointer;
                border-radius: 0.6rem; border: 1px solid hsl(var(--cyan) / 0.2); font-size: 0.875rem;
            }
            .choice-chip-active { border-color: hsl(var(--cyan)); background: hsl(var(--cyan) / 0.15); color: hsl(var(--cyan)); }
            .error-message, .success-message {
                display: flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1rem; border-radius: 0.6rem; font-size: 0.875rem;
            }
            .error-message { background: rgba(127, 29, 29, 0.3); border: 1px solid #b91c1c; color: #fca5a5; }
            .success-message { background: rgba(6, 78, 59, 0.3); border: 1px solid #047857; color: #6ee7b7; }

            /* Step indicator */
            .step-dot {
                width: 2.25rem; height: 2.25rem; border-radius: 9999px; display: flex; align-items: center; justify-content: center;
                border: 2px solid hsl(var(--muted) / 0.4); color: hsl(var(--muted)); transition: all 0.3s;
            }
            .step-dot-current { border-color: hsl(var(--cyan)); color: hsl(var(--cyan)); box-shadow: 0 0 20px hsl(var(--cyan) / 0.4); }
            .step-dot-done { border-color: hsl(var(--cyan)); background: hsl(var(--cyan)); color: #020617; }
            .step-connector { display: none; }

            /* Carousel */
            .carousel-control {
                width: 2.75rem; height: 2.75rem; border-radius: 9999px; display: inline-flex; align-items: center; justify-content: center;
                border: 1px solid hsl(var(--cyan) / 0.3); transition: background 0.2s;
            }
            .carousel-control:hover { background: hsl(var(--cyan) / 0.1); }
            .carousel-dot { width: 0.6rem; height: 0.6rem; border-radius: 9999px; background: hsl(var(--muted) / 0.4); transition: all 0.3s; }
            .carousel-dot-active { width: 2rem; background: hsl(var(--cyan)); }

            /* Entrance animations */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(30px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up { animation: landing-fade-in-up 0.8s ease-out both; }
            .landing-delay-200 { animation-delay: 0.2s; }
            .landing-delay-400 { animation-delay: 0.4s; }

            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.7s ease-out, transform 0.7s ease-out;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }
            @media (prefers-reduced-motion: reduce) {
                .landing-scroll-animate, .landing-fade-in-up { opacity: 1; transform: none; animation: none; transition: none; }
            }
            "#
        </style>
    }
}

/// Share of an element that must be on screen before it is revealed
const REVEAL_THRESHOLD: f64 = 0.1;
/// Margin around the viewport used for the reveal check
const REVEAL_ROOT_MARGIN: &str = "0px";
/// Class toggled on revealed elements
const REVEAL_CLASS: &str = "visible";

/// Reveal script for `.landing-scroll-animate` elements.
///
/// Elements reveal once and stop being observed, unless they carry
/// `data-reveal-repeat`, in which case they hide again when scrolled away.
/// Without IntersectionObserver everything is shown straight away.
fn scroll_reveal_script() -> String {
    format!(
        r#"
(function() {{
    function reveal() {{
        var targets = document.querySelectorAll('.landing-scroll-animate');
        if (!('IntersectionObserver' in window)) {{
            targets.forEach(function(el) {{ el.classList.add('{class}'); }});
            return;
        }}
        var observer = new IntersectionObserver(function(entries) {{
            entries.forEach(function(entry) {{
                var repeat = entry.target.hasAttribute('data-reveal-repeat');
                if (entry.isIntersecting) {{
                    entry.target.classList.add('{class}');
                    if (!repeat) observer.unobserve(entry.target);
                }} else if (repeat) {{
                    entry.target.classList.remove('{class}');
                }}
            }});
        }}, {{ threshold: {threshold}, rootMargin: '{margin}' }});
        targets.forEach(function(el) {{ observer.observe(el); }});
    }}
    if (document.readyState === 'loading') {{
        document.addEventListener('DOMContentLoaded', reveal);
    }} else {{
        reveal();
    }}
}})();
"#,
        class = REVEAL_CLASS,
        threshold = REVEAL_THRESHOLD,
        margin = REVEAL_ROOT_MARGIN,
    )
}

#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! { <script inner_html=scroll_reveal_script()></script> }
}
