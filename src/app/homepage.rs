use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::use_element_visibility;

use crate::content::{
    BLOG_TEASERS, EDUCATION, EXPERIENCE, OWNER_EMAIL, OWNER_NAME, PROJECTS, SKILLS, SOCIAL_LINKS,
    TESTIMONIALS,
};

use super::contact_form::ContactForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full Stack Developer | Flutter, Angular & React Expert" />
        <div class="min-h-screen">
            <Hero />
            <Skills />
            <Experience />
            <EducationSection />
            <Projects />
            <Testimonials />
            <BlogTeasers />
            <Contact />
        </div>
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
fn Reveal(children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() && !seen.get_untracked() {
            set_seen.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if seen.get() {
                    "transition-all duration-500 opacity-100 translate-y-0"
                } else {
                    "transition-all duration-500 opacity-0 translate-y-5"
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
fn TechTags(tech: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {tech
                .iter()
                .map(|t| {
                    view! { <span class="px-3 py-1 bg-muted/20 rounded-full text-sm">{*t}</span> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="section-container">
            <Reveal>
                <div class="text-center">
                    <p class="text-lg text-muted mb-2">{format!("Hi, I'm {OWNER_NAME}")}</p>
                    <h1 class="text-4xl sm:text-6xl font-bold mb-6">"Full Stack Developer"</h1>
                    <p class="text-xl text-muted mb-8 max-w-2xl mx-auto">
                        "Building modern web and mobile applications using Spring Boot, Angular, React, PHP, Flutter, and MySQL databases."
                    </p>
                    <a href="#projects" class="btn-primary">
                        "View My Work"
                    </a>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section-container bg-muted/10">
            <Reveal>
                <h2 class="section-title">"My Skills"</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-8">
                    {SKILLS
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="card">
                                    <h3 class="font-semibold mb-2">{s.name}</h3>
                                    <p class="text-sm text-muted">{s.level.label()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="section-container">
            <Reveal>
                <h2 class="section-title">"Experience"</h2>
                <div class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .map(|job| {
                            view! {
                                <div class="card">
                                    <div class="flex justify-between items-start mb-4">
                                        <div>
                                            <h3 class="text-xl font-semibold">{job.title}</h3>
                                            <p class="text-muted">{job.company}</p>
                                        </div>
                                        <span class="text-sm text-muted shrink-0">{job.period}</span>
                                    </div>
                                    <p class="mb-4">{job.description}</p>
                                    <TechTags tech=job.tech />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="section-container bg-muted/10">
            <Reveal>
                <h2 class="section-title">"Education"</h2>
                <div class="space-y-8">
                    {EDUCATION
                        .iter()
                        .map(|edu| {
                            view! {
                                <div class="card">
                                    <div class="flex justify-between items-start mb-4">
                                        <div>
                                            <h3 class="text-xl font-semibold">{edu.degree}</h3>
                                            <p class="text-muted">{edu.school}</p>
                                        </div>
                                        <span class="text-sm text-muted shrink-0">{edu.period}</span>
                                    </div>
                                    <p>{edu.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section-container">
            <Reveal>
                <h2 class="section-title">"Featured Projects"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! {
                                <div class="card flex flex-col">
                                    <h3 class="text-xl font-semibold mb-3">{p.title}</h3>
                                    <p class="text-muted mb-4 flex-grow">{p.description}</p>
                                    <div class="mb-4">
                                        <TechTags tech=p.tech />
                                    </div>
                                    <a
                                        href=p.link
                                        class="text-primary hover:underline inline-flex items-center gap-2"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        "View Project "
                                        <i class="devicon-github-plain"></i>
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="section-container bg-muted/10">
            <Reveal>
                <h2 class="section-title">"What People Say"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <figure class="card">
                                    <blockquote class="italic mb-4">{format!("“{}”", t.quote)}</blockquote>
                                    <figcaption class="text-sm text-muted">
                                        <span class="font-semibold">{t.author}</span>
                                        {format!(", {}", t.role)}
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn BlogTeasers() -> impl IntoView {
    view! {
        <section id="blog" class="section-container">
            <Reveal>
                <h2 class="section-title">"From the Blog"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {BLOG_TEASERS
                        .iter()
                        .map(|b| {
                            let body = view! {
                                <p class="text-sm text-muted mb-2">{b.display_date()}</p>
                                <h3 class="text-xl font-semibold mb-2">{b.title}</h3>
                                <p class="text-muted">{b.summary}</p>
                            };
                            match b.link {
                                Some(href) => {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="card block hover:shadow-lg transition-shadow"
                                        >
                                            {body}
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => view! { <article class="card">{body}</article> }.into_any(),
                            }
                        })
                        .collect_view()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let linkedin = SOCIAL_LINKS
        .iter()
        .find(|l| l.label == "LinkedIn")
        .map(|l| l.href)
        .unwrap_or_default();

    view! {
        <section id="contact" class="section-container bg-muted/10">
            <Reveal>
                <h2 class="section-title">"Get in Touch"</h2>
                <div class="max-w-2xl mx-auto">
                    <p class="text-lg text-muted mb-8 text-center">
                        "I am currently open to new opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                    </p>
                    <ContactForm />
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-6 mt-8">
                        <a
                            href=format!("mailto:{OWNER_EMAIL}")
                            class="btn-secondary inline-flex items-center gap-2"
                        >
                            "📧 Email Me"
                        </a>
                        <a
                            href=linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn-secondary inline-flex items-center gap-2"
                        >
                            <i class="devicon-linkedin-plain"></i>
                            "Connect on LinkedIn"
                        </a>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}
