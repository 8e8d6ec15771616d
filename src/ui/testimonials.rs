//! Testimonials carousel
//!
//! Shows one testimonial at a time with previous/next controls that wrap
//! around, and advances on its own every few seconds.

use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Interval between automatic slides
pub const AUTO_ADVANCE_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
    pub course: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Lucas Ferreira",
        role: "Desenvolvedor Full Stack",
        content: "A Diix Academy transformou minha carreira. Os cursos são incrivelmente bem estruturados e os mentores são de primeira linha.",
        rating: 5,
        course: "Desenvolvimento Web Avançado",
    },
    Testimonial {
        name: "Mariana Costa",
        role: "UX Designer",
        content: "Nunca pensei que aprender online pudesse ser tão envolvente. O método de ensino é revolucionário e os resultados são reais.",
        rating: 5,
        course: "Design de Interfaces",
    },
    Testimonial {
        name: "Pedro Santos",
        role: "Data Scientist",
        content: "Os projetos práticos da Diix Academy me prepararam para desafios reais do mercado. Consegui minha promoção após 3 meses!",
        rating: 5,
        course: "Ciência de Dados",
    },
    Testimonial {
        name: "Ana Oliveira",
        role: "Product Manager",
        content: "A comunidade é incrível! Fiz conexões valiosas e aprendi tanto com outros alunos quanto com os instrutores.",
        rating: 5,
        course: "Gestão de Produtos Digitais",
    },
    Testimonial {
        name: "Rafael Lima",
        role: "DevOps Engineer",
        content: "O suporte é excepcional. Qualquer dúvida é respondida rapidamente e os materiais extras são um diferencial enorme.",
        rating: 5,
        course: "DevOps & Cloud Computing",
    },
];

/// Index after `current`, wrapping to the first slide
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current`, wrapping to the last slide
pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + len - 1) % len }
}

/// Initials shown in place of an avatar photo
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let len = TESTIMONIALS.len();
    let current = RwSignal::new(0_usize);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        let autoplay = Interval::new(AUTO_ADVANCE_MS, move || {
            current.update(|i| *i = next_index(*i, len));
        });
        let autoplay = StoredValue::new_local(Some(autoplay));
        on_cleanup(move || {
            if let Some(interval) = autoplay.try_update_value(Option::take).flatten() {
                interval.cancel();
            }
        });
    }

    view! {
        <section id="depoimentos" class="py-20 px-4 relative overflow-hidden">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-12 landing-scroll-animate">
                    <span class="section-tag">"DEPOIMENTOS"</span>
                    <h2 class="section-title">
                        "Histórias de " <span class="text-primary glow-text">"Sucesso"</span>
                    </h2>
                    <p class="section-subtitle">
                        "Veja o que nossos alunos dizem sobre a experiência transformadora na Diix Academy"
                    </p>
                </div>

                <div class="relative landing-scroll-animate" aria-roledescription="carousel">
                    {move || {
                        let t = TESTIMONIALS[current.get().min(len.saturating_sub(1))];
                        view! {
                            <article class="glass-card rounded-3xl p-8 sm:p-10 relative">
                                <div class="absolute -top-5 -right-5 w-12 h-12 rounded-full glass-card flex items-center justify-center">
                                    <Icon name=icons::QUOTE class="w-6 h-6"/>
                                </div>
                                <div class="flex items-center gap-4 mb-6">
                                    <div class="w-16 h-16 rounded-full bg-primary/10 ring-2 ring-primary/30 flex items-center justify-center font-bold text-primary">
                                        {initials(t.name)}
                                    </div>
                                    <div>
                                        <h4 class="text-xl font-bold">{t.name}</h4>
                                        <p class="text-sm text-muted">{t.role}</p>
                                    </div>
                                </div>
                                <div class="flex gap-1 mb-4" aria-label=format!("{} de 5 estrelas", t.rating)>
                                    {(0..t.rating).map(|_| view! { <Icon name=icons::STAR class="w-5 h-5"/> }).collect_view()}
                                </div>
                                <p class="text-lg leading-relaxed mb-6">"\u{201c}"{t.content}"\u{201d}"</p>
                                <span class="course-badge">{t.course}</span>
                            </article>
                        }
                    }}

                    <div class="flex items-center justify-center gap-4 mt-8">
                        <button
                            type="button"
                            class="carousel-control"
                            aria-label="Depoimento anterior"
                            on:click=move |_| current.update(|i| *i = prev_index(*i, len))
                        >
                            <Icon name=icons::CHEVRON_LEFT class="w-5 h-5"/>
                        </button>
                        <div class="flex gap-2">
                            {(0..len).map(|i| view! {
                                <button
                                    type="button"
                                    class="carousel-dot"
                                    class:carousel-dot-active=move || current.get() == i
                                    aria-label=format!("Ir para depoimento {}", i + 1)
                                    on:click=move |_| current.set(i)
                                />
                            }).collect_view()}
                        </div>
                        <button
                            type="button"
                            class="carousel-control"
                            aria-label="Próximo depoimento"
                            on:click=move |_| current.update(|i| *i = next_index(*i, len))
                        >
                            <Icon name=icons::CHEVRON_RIGHT class="w-5 h-5"/>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_first() {
        assert_eq!(next_index(0, 5), 1);
        assert_eq!(next_index(4, 5), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        assert_eq!(prev_index(1, 5), 0);
        assert_eq!(prev_index(0, 5), 4);
    }

    #[test]
    fn test_empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let len = TESTIMONIALS.len();
        let mut i = 2;
        for _ in 0..len {
            i = next_index(i, len);
        }
        assert_eq!(i, 2);
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Lucas Ferreira"), "LF");
        assert_eq!(initials("Ana Maria Oliveira"), "AM");
        assert_eq!(initials(""), "");
    }
}
