use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Skill;

#[derive(Properties, PartialEq)]
pub struct SkillCardProps {
    pub skill: &'static Skill,
}

/// Card that reveals a proficiency bar and description on hover.
#[function_component(SkillCard)]
pub fn skill_card(props: &SkillCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let skill = props.skill;

    html! {
        <div class="skill-card" {onmouseenter} {onmouseleave}>
            <h3>{skill.name}</h3>
            {
                if *hovered {
                    html! {
                        <div class="skill-detail">
                            <div class="skill-progress">
                                <div
                                    class="skill-progress-fill"
                                    style={format!("width: {}%", skill.proficiency)}
                                ></div>
                            </div>
                            <p>{skill.description}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
