use yew::prelude::*;

use crate::components::call_to_action::CallToAction;
use crate::components::motion::FadeInUp;
use crate::components::section_divider::{Align, SectionDivider};
use crate::data::services::{BENEFITS, PROCESS_STEPS, SERVICES};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero services-hero">
                <div class="page-hero-gradient" aria-hidden="true"></div>
                <div class="container page-hero-content">
                    <FadeInUp>
                        <h1>{"Our Services"}</h1>
                    </FadeInUp>
                    <FadeInUp index={2}>
                        <p>{"Comprehensive travel solutions tailored to make your journey extraordinary"}</p>
                    </FadeInUp>
                </div>
            </section>

            <SectionDivider align={Align::Right} />

            <section class="section">
                <div class="container">
                    <FadeInUp class="section-header">
                        <h2>{"What We Offer"}</h2>
                        <p>
                            {"From planning to execution, we handle every aspect of your travel journey with personalized care and professional expertise."}
                        </p>
                    </FadeInUp>
                    <div class="card-grid four">
                        { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <FadeInUp key={service.id} index={i} step_ms={200}>
                                <div class="card service-card">
                                    <div class="service-icon">{service.icon}</div>
                                    <h3>{service.title}</h3>
                                    <p>{service.description}</p>
                                    <ul class="service-features">
                                        { for service.features.iter().map(|feature| html! {
                                            <li><span class="dot"></span>{*feature}</li>
                                        }) }
                                    </ul>
                                    <div class="service-footer">
                                        <a href="/#contact" class="service-link">{"Learn More →"}</a>
                                    </div>
                                </div>
                            </FadeInUp>
                        }) }
                    </div>
                </div>
            </section>

            <SectionDivider align={Align::Left} />

            <section class="section">
                <div class="container">
                    <FadeInUp class="section-header">
                        <h2>{"How We Work"}</h2>
                        <p>{"Our proven process ensures your travel experience is seamless from start to finish"}</p>
                    </FadeInUp>
                    <div class="card-grid four">
                        { for PROCESS_STEPS.iter().enumerate().map(|(i, step)| html! {
                            <FadeInUp index={i} step_ms={200}>
                                <div class="process-step">
                                    <div class="process-icon">
                                        {step.icon}
                                        <span class="process-number">{step.step}</span>
                                    </div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </FadeInUp>
                        }) }
                    </div>
                </div>
            </section>

            <SectionDivider align={Align::Right} />

            <section class="section">
                <div class="container">
                    <FadeInUp class="section-header">
                        <h2>{"Why Choose Our Services?"}</h2>
                    </FadeInUp>
                    <div class="card-grid three">
                        { for BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                            <FadeInUp index={i} step_ms={200}>
                                <div class="card benefit-card">
                                    <div class="benefit-icon">{benefit.icon}</div>
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.description}</p>
                                </div>
                            </FadeInUp>
                        }) }
                    </div>
                </div>
            </section>

            <SectionDivider align={Align::Left} />

            <CallToAction
                title="Ready to Plan Your Next Adventure?"
                subtitle="Let our travel experts create a personalized experience just for you"
                primary_label="Get Free Consultation"
                secondary_label="View Our Packages"
            />
        </div>
    }
}
